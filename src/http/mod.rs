//! HTTP transport module
//!
//! Provides the request execution layer the generated operations sit on:
//! URL construction from a resolved connection, per-attempt request
//! signing, retry with capped exponential backoff, and JSON decoding.

mod client;

pub use client::RestClient;
