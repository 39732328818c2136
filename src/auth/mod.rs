//! Authentication module
//!
//! Supports the three NimboCast credential schemes: cluster shared-secret,
//! HTTP Basic, and bearer token.
//!
//! An [`AuthKey`] computes an `Authorization` header value on demand; the
//! cluster scheme samples the clock per call, so keys are safe to share
//! across concurrent requests.

mod key;

pub use key::{AuthKey, ClusterToken};

#[cfg(test)]
mod tests;
