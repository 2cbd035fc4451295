//! Common test utilities for sofa-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::MockCouch;
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let couch = MockCouch::start().await;
//!     let client = couch.client();
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod server;

pub use server::MockCouch;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
