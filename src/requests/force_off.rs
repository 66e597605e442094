//! Force-offline request against the panel backend.
//!
//! Forces a remote tunnel offline by id. Every failure mode, including an
//! empty backend payload, is absorbed into a normalized `ApiResponse` so
//! callers never need an error-handling wrapper around this operation.

use crate::api::client::{ApiClient, ApiClientExt, CallOptions};
use crate::api::types::ApiResponse;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};

/// Backend action name for the force-offline operation.
const FORCE_OFF_ACTION: &str = "forceOff";

/// Request payload: the tunnel to disconnect.
///
/// `proxy_id` is a 64-bit id; values past 2^53 must survive serialization
/// exactly, which serde_json guarantees for native integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceOfflineRequest {
    pub proxy_id: i64,
}

/// Forces the tunnel identified by `request.proxy_id` offline.
///
/// A non-empty backend response is returned unchanged. An empty response or
/// any call failure yields `ApiResponse { data: Null, flag: false, msg }`
/// with `msg` set to the error's text, and logs one error-level event.
/// This function never returns an error.
pub async fn force_offline<C>(client: &C, request: ForceOfflineRequest) -> ApiResponse
where
    C: ApiClient + ?Sized,
{
    let result = async {
        let body = serde_json::to_value(request).map_err(ApiError::Encode)?;
        client
            .call_api::<ApiResponse>(FORCE_OFF_ACTION, CallOptions::post(body))
            .await?
            .ok_or(ApiError::EmptyResponse)
    }
    .await;

    match result {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(
                proxy_id = request.proxy_id,
                %error,
                "failed to force-offline tunnel"
            );
            ApiResponse::failure(error.to_string())
        }
    }
}
