//! Connection descriptor resolution
//!
//! One descriptor URL selects the target host, protocol, and authentication
//! scheme for every generated operation.

use crate::auth::AuthKey;
use crate::error::{Error, Result};
use tracing::debug;
use url::Url;

/// Originator tag reported when the descriptor does not override it
pub const DEFAULT_ORIGINATOR: &str = "nimbocast-sdk";

/// Default transport-level retry budget per request
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Wire protocol used to reach a management API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// Plain HTTP, default port 80
    #[default]
    Http,
    /// HTTP over TLS, default port 443
    Https,
}

impl Protocol {
    /// Default port when the descriptor does not name one
    pub fn default_port(self) -> u16 {
        match self {
            Protocol::Http => 80,
            Protocol::Https => 443,
        }
    }

    /// URL scheme string
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// Resolved connection configuration
///
/// Built once from a descriptor URL, immutable afterwards, and consumed by
/// every generated operation to build target URLs and headers.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Wire protocol
    pub protocol: Protocol,
    /// Target hostname
    pub hostname: String,
    /// Target port
    pub port: u16,
    /// Credential used to sign every request
    pub auth: AuthKey,
    /// Originator tag attached to outgoing requests
    pub originator: String,
    /// Transport-level retry budget per request
    pub max_retries: u32,
}

impl ConnectionConfig {
    /// Resolve a descriptor URL of the form
    /// `scheme://[user[:pass]@]host[:port][?cluster_key=...&originator=...]`.
    ///
    /// Credential precedence: userinfo with a password selects Basic auth,
    /// username-only userinfo selects Bearer, and either overrides a
    /// `cluster_key` query parameter. A descriptor carrying no credential at
    /// all is rejected.
    pub fn from_descriptor(descriptor: &str) -> Result<Self> {
        let url = Url::parse(descriptor).map_err(|e| match e {
            url::ParseError::InvalidPort => Error::InvalidPort {
                url: descriptor.to_string(),
            },
            other => Error::InvalidUrl(other),
        })?;

        let protocol = match url.scheme() {
            "http" => Protocol::Http,
            "https" => Protocol::Https,
            other => {
                return Err(Error::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        };

        let hostname = url
            .host_str()
            .ok_or_else(|| Error::config("descriptor URL has no host"))?
            .to_string();

        let port = url.port().unwrap_or_else(|| protocol.default_port());

        let originator =
            query_value(&url, "originator").unwrap_or_else(|| DEFAULT_ORIGINATOR.to_string());

        let username = url.username();
        let auth = if let Some(password) = url.password() {
            AuthKey::Basic {
                username: username.to_string(),
                password: password.to_string(),
            }
        } else if !username.is_empty() {
            AuthKey::Bearer {
                token: username.to_string(),
            }
        } else if let Some(secret) = query_value(&url, "cluster_key") {
            AuthKey::Cluster { secret }
        } else {
            return Err(Error::config(
                "descriptor URL carries no credentials (expected userinfo or cluster_key)",
            ));
        };

        debug!(
            "Resolved descriptor to {}://{}:{}",
            protocol.scheme(),
            hostname,
            port
        );

        Ok(Self {
            protocol,
            hostname,
            port,
            auth,
            originator,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Base URL for request construction
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}",
            self.protocol.scheme(),
            self.hostname,
            self.port
        )
    }

    /// Override the transport retry budget
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
