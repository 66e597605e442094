pub mod api;
pub mod config;
pub mod error;
pub mod requests;

pub use api::{ApiClient, ApiClientExt, ApiResponse, CallOptions, HttpApiClient};
pub use config::Config;
pub use error::ApiError;
pub use requests::{force_offline, software_info, ForceOfflineRequest};
