//! Fetch Module
//!
//! HTTP client capability and the caching wrapper in front of it.

mod cached;
mod client;

pub use cached::{CachedFetch, ResponseCache};
pub use client::{HttpClient, HttpRequest, HttpResponse, ReqwestClient, REQUEST_TIMEOUT};
