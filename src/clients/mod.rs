//! Clients - HTTP client for the TransFlow backend
//!
//! This module contains the request wrapper and the transport it runs on.

pub mod api_client;
pub mod transport;

// Re-export main types for convenience
pub use api_client::{error_message, ApiClient, RequestOptions};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
