//! HTTP networking module
//!
//! Provides the HTTP client used by remote suggestion providers.

mod client;

pub use client::{HttpClient, HttpResponse};
