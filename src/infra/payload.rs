use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// List response envelope of the museum API.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiListResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default, alias = "mensaje")]
    pub message: Option<String>,
}

/// Pulls the record array out of a list payload.
///
/// Accepts a bare array, an object with a `data` array, or an object with a
/// `recordset` array (stored-procedure endpoints). Any other shape yields an
/// empty list. A payload flagged `ok: false` is logged and its data, if any,
/// still used.
pub fn extract_records(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if map.get("ok").and_then(Value::as_bool) == Some(false) {
                let message = map
                    .get("message")
                    .or_else(|| map.get("mensaje"))
                    .and_then(Value::as_str)
                    .unwrap_or("no message");
                tracing::warn!(api_message = message, "API reported a failed list response");
            }
            for key in ["data", "recordset"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return items;
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Parses a list payload from raw bytes.
pub fn parse_list_payload(bytes: &[u8]) -> Result<Vec<Value>> {
    let payload: Value = serde_json::from_slice(bytes)?;
    Ok(extract_records(payload))
}

/// Message carried by an error body in the list envelope, if any.
pub fn error_message(bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<ApiListResponse>(bytes)
        .ok()
        .filter(|envelope| !envelope.ok)
        .and_then(|envelope| envelope.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_records_shapes() {
        assert_eq!(extract_records(json!([{ "id": 1 }])).len(), 1);
        assert_eq!(extract_records(json!({ "ok": true, "data": [{}, {}] })).len(), 2);
        assert_eq!(extract_records(json!({ "recordset": [{}] })).len(), 1);
        assert!(extract_records(json!({ "ok": true, "data": "nope" })).is_empty());
        assert!(extract_records(json!("text")).is_empty());
    }

    #[test]
    fn test_failed_response_still_yields_data() {
        let records = extract_records(json!({ "ok": false, "mensaje": "parcial", "data": [{}] }));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_error_message_spanish_alias() {
        let body = br#"{ "ok": false, "data": [], "mensaje": "sin acceso" }"#;
        assert_eq!(error_message(body).as_deref(), Some("sin acceso"));

        assert_eq!(error_message(br#"{ "ok": true, "message": "fine" }"#), None);
        assert_eq!(error_message(b"<html>502</html>"), None);
    }

    #[test]
    fn test_parse_list_payload_rejects_invalid_json() {
        use crate::error::CatalogError;
        assert!(matches!(parse_list_payload(b"{not json"), Err(CatalogError::Json(_))));
    }
}
