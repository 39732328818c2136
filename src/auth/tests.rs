//! Tests for the auth module

use super::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

fn cluster_header_pattern() -> Regex {
    Regex::new(r"^Cluster (\d+):([a-f0-9]{40})$").unwrap()
}

#[test]
fn test_cluster_header_format() {
    let key = AuthKey::Cluster {
        secret: "topsecret".to_string(),
    };

    let header = key.authorization();
    assert!(
        cluster_header_pattern().is_match(&header),
        "unexpected header: {header}"
    );
}

#[test]
fn test_cluster_known_answer() {
    let token = ClusterToken::at(1_700_000_000, "topsecret");
    assert_eq!(token.timestamp, 1_700_000_000);
    assert_eq!(token.digest, "3fe196b71000b14063b8a8e7cce9ce9897f6bf58");
    assert_eq!(
        token.header(),
        "Cluster 1700000000:3fe196b71000b14063b8a8e7cce9ce9897f6bf58"
    );
}

#[test]
fn test_cluster_distinct_secrets_differ() {
    let a = ClusterToken::at(1_700_000_000, "secret-a");
    let b = ClusterToken::at(1_700_000_000, "secret-b");

    assert_eq!(a.timestamp, b.timestamp);
    assert_ne!(a.digest, b.digest);
    assert_ne!(a.header(), b.header());
}

#[test]
fn test_cluster_timestamps_increase() {
    let earlier = ClusterToken::at(1_700_000_000, "topsecret");
    let later = ClusterToken::at(1_700_000_001, "topsecret");

    assert!(later.timestamp > earlier.timestamp);
    assert_ne!(earlier.digest, later.digest);
}

#[test]
fn test_cluster_empty_secret() {
    // SHA1("0:")
    let token = ClusterToken::at(0, "");
    assert_eq!(token.digest, "b44b82a4bc6c35f6ad5e9fceefef9509c17fba74");
}

#[test]
fn test_cluster_token_matches_combined_header() {
    let token = ClusterToken::at(1_234_567_890, "cluster-secret");
    let header = token.header();

    let captures = cluster_header_pattern().captures(&header).unwrap();
    assert_eq!(captures[1].parse::<i64>().unwrap(), token.timestamp);
    assert_eq!(&captures[2], token.digest.as_str());
}

#[test]
fn test_cluster_token_only_for_cluster_keys() {
    let key = AuthKey::Cluster {
        secret: "s".to_string(),
    };
    assert!(key.cluster_token().is_some());

    let key = AuthKey::Bearer {
        token: "t".to_string(),
    };
    assert!(key.cluster_token().is_none());

    let key = AuthKey::Basic {
        username: "u".to_string(),
        password: "p".to_string(),
    };
    assert!(key.cluster_token().is_none());
}

fn decode_basic_payload(header: &str) -> String {
    let encoded = header.strip_prefix("Basic ").unwrap();
    String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
}

#[test]
fn test_basic_round_trip() {
    let key = AuthKey::Basic {
        username: "user".to_string(),
        password: "pass".to_string(),
    };
    assert_eq!(key.authorization(), "Basic dXNlcjpwYXNz");
    assert_eq!(decode_basic_payload(&key.authorization()), "user:pass");
}

#[test]
fn test_basic_empty_credentials() {
    let key = AuthKey::Basic {
        username: String::new(),
        password: String::new(),
    };
    assert_eq!(decode_basic_payload(&key.authorization()), ":");

    let key = AuthKey::Basic {
        username: "user".to_string(),
        password: String::new(),
    };
    assert_eq!(decode_basic_payload(&key.authorization()), "user:");

    let key = AuthKey::Basic {
        username: String::new(),
        password: "pw".to_string(),
    };
    assert_eq!(decode_basic_payload(&key.authorization()), ":pw");
}

#[test]
fn test_bearer_passthrough() {
    let key = AuthKey::Bearer {
        token: "my-token".to_string(),
    };
    assert_eq!(key.authorization(), "Bearer my-token");
}

#[test]
fn test_bearer_empty_token() {
    let key = AuthKey::Bearer {
        token: String::new(),
    };
    assert_eq!(key.authorization(), "Bearer ");
}

#[test]
fn test_bearer_long_token() {
    let token = "x".repeat(8192);
    let key = AuthKey::Bearer {
        token: token.clone(),
    };
    assert_eq!(key.authorization(), format!("Bearer {token}"));
}

#[test]
fn test_repeated_computation_is_deterministic_for_static_schemes() {
    let basic = AuthKey::Basic {
        username: "user".to_string(),
        password: "pass".to_string(),
    };
    assert_eq!(basic.authorization(), basic.authorization());

    let bearer = AuthKey::Bearer {
        token: "tok".to_string(),
    };
    assert_eq!(bearer.authorization(), bearer.authorization());
}
