//! Turning failed API responses into banner text

use serde_json::Value;

/// Message for a request that never got an HTTP answer
pub fn transport_error(cause: impl std::fmt::Display) -> String {
    format!("Sunucuya ulaşılamadı: {}", cause)
}

/// Message for a 2xx answer whose body could not be decoded
pub fn decode_error(cause: impl std::fmt::Display) -> String {
    format!("Yanıt çözümlenemedi: {}", cause)
}

fn item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `field: message` pairs of a validation payload, in the order the server
/// sent the keys. `detail` is left out, as are values that are neither
/// strings nor arrays.
fn field_messages(map: &serde_json::Map<String, Value>) -> Vec<String> {
    map.iter()
        .filter(|(key, _)| key.as_str() != "detail")
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some(format!("{}: {}", key, s)),
            Value::Array(items) => {
                let joined = items.iter().map(item_text).collect::<Vec<_>>().join(" ");
                Some(format!("{}: {}", key, joined))
            }
            _ => None,
        })
        .collect()
}

fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Human-readable message for a non-2xx response.
///
/// Field errors win over `detail`, `detail` wins over the raw JSON body and
/// anything else ends up as the generic status message.
pub fn compose_error_message(status: u16, body: &str) -> String {
    let fallback = || format!("İstek başarısız (HTTP {})", status);

    let parsed: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return fallback(),
    };

    if let Value::Object(map) = &parsed {
        let pairs = field_messages(map);
        if !pairs.is_empty() {
            return pairs.join(" | ");
        }
        if let Some(Value::String(detail)) = map.get("detail") {
            if !detail.trim().is_empty() {
                return detail.clone();
            }
        }
    }

    if is_empty_json(&parsed) {
        return fallback();
    }
    item_text(&parsed)
}

/// DELETE answers 204 with no body on success; any 2xx counts.
pub fn delete_outcome(status: u16, body: &str) -> Result<(), String> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(compose_error_message(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_error() {
        let body = r#"{"artifact_no": ["This field must be unique."]}"#;
        assert_eq!(
            compose_error_message(400, body),
            "artifact_no: This field must be unique."
        );
    }

    #[test]
    fn several_fields_and_messages() {
        let body = r#"{"main_code": ["Bu alan zorunlu."], "artifact_date": ["Geçersiz.", "Tarih giriniz."]}"#;
        assert_eq!(
            compose_error_message(400, body),
            "main_code: Bu alan zorunlu. | artifact_date: Geçersiz. Tarih giriniz."
        );
    }

    #[test]
    fn field_errors_keep_server_order() {
        let body = r#"{"title": ["a"], "artifact_no": ["b"], "detail": "c", "main_code": ["d"]}"#;
        assert_eq!(compose_error_message(400, body), "title: a | artifact_no: b | main_code: d");
    }

    #[test]
    fn string_valued_field_error() {
        let body = r#"{"artifact_no": "Bu Anakod için bu Buluntu No zaten mevcut."}"#;
        assert_eq!(
            compose_error_message(400, body),
            "artifact_no: Bu Anakod için bu Buluntu No zaten mevcut."
        );
    }

    #[test]
    fn non_string_items_are_json() {
        let body = r#"{"details": [{"height": "bad"}]}"#;
        assert_eq!(compose_error_message(400, body), r#"details: {"height":"bad"}"#);
    }

    #[test]
    fn falls_back_to_detail() {
        assert_eq!(compose_error_message(404, r#"{"detail": "Not found."}"#), "Not found.");
        // field errors still win
        let body = r#"{"detail": "Hata", "code": ["x"]}"#;
        assert_eq!(compose_error_message(400, body), "code: x");
    }

    #[test]
    fn falls_back_to_raw_json() {
        assert_eq!(compose_error_message(400, r#"["bozuk istek"]"#), r#"["bozuk istek"]"#);
        assert_eq!(compose_error_message(400, r#"{"count": 3}"#), r#"{"count":3}"#);
        assert_eq!(compose_error_message(400, r#""düz metin""#), "düz metin");
    }

    #[test]
    fn falls_back_to_status() {
        assert_eq!(compose_error_message(500, ""), "İstek başarısız (HTTP 500)");
        assert_eq!(compose_error_message(502, "<html>Bad Gateway</html>"), "İstek başarısız (HTTP 502)");
        assert_eq!(compose_error_message(400, "{}"), "İstek başarısız (HTTP 400)");
        assert_eq!(compose_error_message(400, "null"), "İstek başarısız (HTTP 400)");
    }

    #[test]
    fn delete_accepts_no_content() {
        assert_eq!(delete_outcome(204, ""), Ok(()));
        assert_eq!(delete_outcome(200, "{}"), Ok(()));
        assert_eq!(
            delete_outcome(403, r#"{"detail": "Yetkiniz yok."}"#),
            Err("Yetkiniz yok.".to_string())
        );
    }

    #[test]
    fn transport_and_decode_messages() {
        assert_eq!(transport_error("timeout"), "Sunucuya ulaşılamadı: timeout");
        assert_eq!(decode_error("EOF"), "Yanıt çözümlenemedi: EOF");
    }
}
