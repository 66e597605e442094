//! Public `commonQuery` lookups.
//!
//! Currently covers the software release listing the launcher uses to pick
//! a frpc build to download.

use crate::api::client::{ApiClient, ApiClientExt, CallOptions};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Backend action for the software release listing.
const SOFTWARE_QUERY_ACTION: &str = "commonQuery/get?key=software";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareInfo {
    pub data: SoftwareData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareData {
    pub latest: String,
    pub source: Vec<SoftwareSource>,
}

/// A download mirror entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareSource {
    pub label: String,
    pub value: String,
}

impl SoftwareData {
    /// Latest version with the surrounding slashes the backend ships
    /// stripped off.
    pub fn latest_version(&self) -> &str {
        self.latest.trim_matches('/')
    }
}

/// Fetches the software release listing.
///
/// Unlike `force_offline`, call failures propagate to the caller; an empty
/// payload is reported as `ApiError::EmptyResponse`.
pub async fn software_info<C>(client: &C) -> Result<SoftwareInfo, ApiError>
where
    C: ApiClient + ?Sized,
{
    client
        .call_api::<SoftwareInfo>(SOFTWARE_QUERY_ACTION, CallOptions::get())
        .await?
        .ok_or(ApiError::EmptyResponse)
}
