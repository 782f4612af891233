// stored attempt text must be valid JSON; non-JSON gateway output is wrapped
pub fn wrap_raw(raw: &str) -> String {
    if serde_json::from_str::<serde_json::Value>(raw).is_ok() {
        return raw.to_string();
    }
    serde_json::json!({
        "message": raw,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::wrap_raw;

    #[test]
    fn passes_valid_json_through() {
        assert_eq!(wrap_raw(r#"{"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn wraps_plain_text_into_envelope() {
        let out = wrap_raw("<html>502 Bad Gateway</html>");
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["message"], "<html>502 Bad Gateway</html>");
        assert!(v["timestamp"].is_string());
    }
}
