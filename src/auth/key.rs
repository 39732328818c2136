//! Authentication key implementation
//!
//! Computes `Authorization` header values for the three credential schemes
//! accepted by NimboCast deployments.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use sha1::{Digest, Sha1};

/// A credential capable of producing an `Authorization` header value.
///
/// The set of schemes is closed: the connection resolver is the only place
/// keys are constructed from user input, and it chooses the variant from the
/// shape of the descriptor URL.
///
/// Header computation never fails. For [`AuthKey::Cluster`] the timestamp is
/// sampled fresh on every call, so two calls in different seconds produce
/// different, independently valid headers. Basic and bearer values are a
/// deterministic function of the stored credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthKey {
    /// Shared cluster secret, exchanged for a timestamped SHA-1 token
    Cluster {
        /// The cluster-wide shared secret
        secret: String,
    },

    /// HTTP Basic authentication
    Basic {
        /// Username (may be empty)
        username: String,
        /// Password (may be empty)
        password: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The token, passed through verbatim
        token: String,
    },
}

impl AuthKey {
    /// Compute the current `Authorization` header value for this key.
    pub fn authorization(&self) -> String {
        match self {
            AuthKey::Cluster { secret } => ClusterToken::issue(secret).header(),
            AuthKey::Basic { username, password } => {
                let payload = STANDARD.encode(format!("{username}:{password}"));
                format!("Basic {payload}")
            }
            AuthKey::Bearer { token } => format!("Bearer {token}"),
        }
    }

    /// Issue a [`ClusterToken`] for the current instant.
    ///
    /// Returns `None` for basic and bearer keys. Servers that expect the
    /// timestamp and digest as separate headers read the token's fields;
    /// the combined header rendered by [`ClusterToken::header`] comes from
    /// the same sample, so the two views always agree.
    pub fn cluster_token(&self) -> Option<ClusterToken> {
        match self {
            AuthKey::Cluster { secret } => Some(ClusterToken::issue(secret)),
            _ => None,
        }
    }
}

/// One timestamped cluster credential sample.
///
/// Legacy deployments consume `timestamp` and `digest` as distinct headers
/// instead of the combined `Cluster` header; that path may be vestigial but
/// is kept for compatibility. Both renderings come from the single sample
/// taken at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterToken {
    /// Unix timestamp (seconds) the token was issued at
    pub timestamp: i64,
    /// Lowercase hex SHA-1 of `"{timestamp}:{secret}"`
    pub digest: String,
}

impl ClusterToken {
    /// Issue a token for the current wall-clock second.
    pub fn issue(secret: &str) -> Self {
        Self::at(Utc::now().timestamp(), secret)
    }

    /// Compute the token for an explicit timestamp.
    ///
    /// The digest input layout is exactly `"{timestamp}:{secret}"` and the
    /// output is the 40-character lowercase hex SHA-1. The server recomputes
    /// the digest within a bounded acceptance window around the received
    /// timestamp, so this layout is load-bearing wire format.
    pub fn at(timestamp: i64, secret: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("{timestamp}:{secret}").as_bytes());
        Self {
            timestamp,
            digest: hex::encode(hasher.finalize()),
        }
    }

    /// Render the combined `Authorization` header value.
    pub fn header(&self) -> String {
        format!("Cluster {}:{}", self.timestamp, self.digest)
    }
}
