use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP request as delivered by the function platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default = "default_method")]
    pub http_method: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub query_string: HashMap<String, String>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn default_path() -> String {
    "/".to_string()
}

/// Response envelope the function platform expects back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub is_base64_encoded: bool,
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl FunctionResponse {
    /// JSON response with the given status; bodies are bare arrays on
    /// success and `{"error": ...}` objects otherwise.
    pub fn json(status_code: u16, value: serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            is_base64_encoded: false,
            status_code,
            headers,
            body: value.to_string(),
        }
    }
}
