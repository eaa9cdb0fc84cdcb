use crate::shared::api_client::api_get;
use serde_json::Value;

const HEALTH_PATH: &str = "/api/health/";

/// Backend status payload; the shape is whatever the server reports
pub async fn fetch_health() -> Result<Value, String> {
    api_get::<Value>(HEALTH_PATH).await
}

/// Pretty-printed payload for the status panel
pub fn format_payload(payload: &Value) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_is_indented() {
        let text = format_payload(&json!({ "status": "ok" }));
        assert_eq!(text, "{\n  \"status\": \"ok\"\n}");
    }
}
