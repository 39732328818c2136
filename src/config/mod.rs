//! Configuration module
//!
//! Resolves a connection descriptor URL into a [`ConnectionConfig`]: target
//! protocol, host, port, and the [`crate::auth::AuthKey`] chosen from the
//! URL's shape.

mod resolver;

pub use resolver::{ConnectionConfig, Protocol, DEFAULT_MAX_RETRIES, DEFAULT_ORIGINATOR};

#[cfg(test)]
mod tests;
