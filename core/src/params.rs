//! Flattens a [`Request`] into URL query parameters.
//!
//! The request is serialized structurally with serde and the resulting object
//! is walked into flat `key=value` pairs. Empty strings, zero numbers and
//! nulls are dropped; nested objects (the logo) are flattened under a
//! `<field>_` prefix so their keys cannot collide with top-level ones.
//! Pairs come out sorted by key.

use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::types::Request;

/// Encode `request` into ordered query pairs.
pub fn encode_query(request: &Request) -> Result<Vec<(String, String)>, ApiError> {
    let value =
        serde_json::to_value(request).map_err(|e| ApiError::EncodingError(e.to_string()))?;
    let Value::Object(object) = value else {
        return Err(ApiError::EncodingError(
            "request did not serialize to an object".to_string(),
        ));
    };

    let mut pairs = Vec::new();
    flatten("", &object, &mut pairs)?;
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(pairs)
}

/// Encode `request` as a form-urlencoded query string, without the leading `?`.
pub fn to_query_string(request: &Request) -> Result<String, ApiError> {
    let pairs = encode_query(request)?;
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in &pairs {
        serializer.append_pair(key, value);
    }
    Ok(serializer.finish())
}

fn flatten(
    prefix: &str,
    object: &Map<String, Value>,
    out: &mut Vec<(String, String)>,
) -> Result<(), ApiError> {
    for (field, value) in object {
        let key = format!("{prefix}{field}");
        match value {
            Value::Null => {}
            Value::Bool(b) => out.push((key, b.to_string())),
            Value::Number(n) => {
                if let Some(text) = number_text(n) {
                    out.push((key, text));
                }
            }
            Value::String(s) if s.is_empty() => {}
            Value::String(s) => out.push((key, s.clone())),
            Value::Object(nested) => flatten(&format!("{key}_"), nested, out)?,
            Value::Array(_) => {
                return Err(ApiError::EncodingError(format!(
                    "field {key:?} is a list; only flat values can be sent as query parameters"
                )));
            }
        }
    }
    Ok(())
}

/// Text form of a non-zero number; integral floats lose their `.0`.
fn number_text(n: &serde_json::Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return (u != 0).then(|| u.to_string());
    }
    n.as_f64()
        .filter(|f| *f != 0.0)
        .map(|f| format!("{f}"))
}
