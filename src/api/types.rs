use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope used by every panel endpoint.
///
/// The payload is endpoint-defined and left opaque; `flag` is the success
/// indicator and `msg` carries diagnostic text on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Endpoint-defined payload, `Null` when the backend sent none.
    #[serde(default)]
    pub data: Value,
    pub flag: bool,
    pub msg: String,
}

impl ApiResponse {
    pub fn success(data: Value) -> Self {
        Self {
            data,
            flag: true,
            msg: String::new(),
        }
    }

    /// Locally synthesized failure: `data` is `Null`, `flag` is false.
    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            data: Value::Null,
            flag: false,
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_shape() {
        let response = ApiResponse::failure("network timeout");
        assert_eq!(response.data, Value::Null);
        assert!(!response.flag);
        assert_eq!(response.msg, "network timeout");
    }

    #[test]
    fn success_shape() {
        let response = ApiResponse::success(json!({"ok": true}));
        assert!(response.flag);
        assert!(response.msg.is_empty());
        assert_eq!(response.data, json!({"ok": true}));
    }

    #[test]
    fn missing_data_deserializes_to_null() {
        let response: ApiResponse =
            serde_json::from_str(r#"{"flag":false,"msg":"tunnel not found"}"#).unwrap();
        assert_eq!(response.data, Value::Null);
        assert!(!response.flag);
    }

    #[test]
    fn envelope_round_trip() {
        let response = ApiResponse::success(json!({"count": 3}));
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: ApiResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);
    }
}
