use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Callers match on the variant instead of inspecting untyped exceptions:
/// transport failures carry no structure, server rejections carry the HTTP
/// status plus a normalized message, and a decode failure means a 2xx body
/// did not match the expected shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        payload: Option<Value>,
    },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Derive a human-readable message from an error payload.
///
/// Precedence: a `detail` list joins each item's `msg` (or, failing that,
/// the item's JSON dump) with commas; a `detail` string is used verbatim; a
/// bare string payload is used verbatim; anything else falls back to the
/// HTTP status text.
pub fn normalize_error_message(payload: Option<&Value>, fallback: &str) -> String {
    let Some(payload) = payload else {
        return fallback.to_string();
    };

    if let Some(detail) = payload.get("detail") {
        if let Some(items) = detail.as_array() {
            let joined = items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => item.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                return joined;
            }
            return fallback.to_string();
        }
        if let Some(s) = detail.as_str() {
            return s.to_string();
        }
    }

    if let Some(s) = payload.as_str() {
        return s.to_string();
    }

    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_list_joins_msgs() {
        let payload = json!({ "detail": [{ "msg": "a" }, { "msg": "b" }] });
        assert_eq!(normalize_error_message(Some(&payload), "Bad Request"), "a, b");
    }

    #[test]
    fn test_detail_list_falls_back_to_json_dump() {
        let payload = json!({ "detail": [{ "loc": ["body", "email"] }] });
        assert_eq!(
            normalize_error_message(Some(&payload), "Bad Request"),
            "{\"loc\":[\"body\",\"email\"]}"
        );
    }

    #[test]
    fn test_detail_string_used_verbatim() {
        let payload = json!({ "detail": "x" });
        assert_eq!(normalize_error_message(Some(&payload), "Bad Request"), "x");
    }

    #[test]
    fn test_bare_string_payload() {
        let payload = json!("y");
        assert_eq!(normalize_error_message(Some(&payload), "Bad Request"), "y");
    }

    #[test]
    fn test_missing_payload_uses_status_text() {
        assert_eq!(normalize_error_message(None, "Not Found"), "Not Found");
    }

    #[test]
    fn test_empty_detail_list_uses_status_text() {
        let payload = json!({ "detail": [] });
        assert_eq!(
            normalize_error_message(Some(&payload), "Unprocessable Entity"),
            "Unprocessable Entity"
        );
    }
}
