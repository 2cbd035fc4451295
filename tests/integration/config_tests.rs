//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use sofa::{Client, ClientConfig, Credentials, Error};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(yaml.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_config_from_yaml_file() {
        let file = write_config(
            r#"
server_url: "https://couch.example.com/db-proxy/"
timeout: 10
max_retries: 5
credentials:
  username: admin
  password: secret
"#,
        );

        let config = assert_ok!(ClientConfig::from_file(file.path()));
        assert_eq!(config.server_url, "https://couch.example.com/db-proxy/");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.retry_delay_ms, 100);
        assert_eq!(config.credentials, Some(Credentials::new("admin", "secret")));

        let client = assert_ok!(Client::new(config));
        assert_eq!(client.base_url().path(), "/db-proxy/");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let file = write_config("timeout: 3\n");
        let config = assert_ok!(ClientConfig::from_file(file.path()));
        assert_eq!(config.server_url, sofa::config::DEFAULT_SERVER_URL);
        assert_eq!(config.timeout, 3);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_invalid_yaml() {
        let file = write_config("timeout: [not, a, number]\n");
        let error = assert_err!(ClientConfig::from_file(file.path()));
        assert!(matches!(error, Error::Yaml(_)));
    }

    #[test]
    fn test_yaml_with_bad_url_fails_validation() {
        let file = write_config("server_url: \"ftp://couch.example.com\"\n");
        let error = assert_err!(ClientConfig::from_file(file.path()));
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = assert_err!(ClientConfig::from_file(dir.path().join("couch.yaml")));
        assert!(matches!(error, Error::Config(_)));
    }
}
