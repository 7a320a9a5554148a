use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decode a response body, unwrapping the `data` envelope when one is present.
///
/// A `data` key holding `null` counts as absent and the whole object is returned.
pub fn decode_envelope(body: &str) -> Result<Value, TransportError> {
    let parsed: Value = serde_json::from_str(body)?;
    match parsed {
        Value::Object(mut map) => {
            if map.get("data").is_some_and(|data| !data.is_null()) {
                return Ok(map.remove("data").unwrap_or_default());
            }
            Ok(Value::Object(map))
        }
        other => Ok(other),
    }
}
