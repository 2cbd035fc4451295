//! CouchDB client
//!
//! The [`Client`] is the entry point of the crate. Each method starts an
//! action builder from [`crate::action`]; nothing is sent until the builder's
//! `run` method is awaited.

mod client;


pub use client::Client;
