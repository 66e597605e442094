pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientExt, CallOptions, HttpApiClient};
pub use types::ApiResponse;
