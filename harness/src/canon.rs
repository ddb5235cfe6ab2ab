//! Canonical JSON encoding for run reports.
//!
//! Report digests are computed over these bytes, so two runs of the same
//! world and mode must encode identically on every platform:
//!
//! - object members sorted by key (byte order), no whitespace
//! - strings escaped per RFC 8259, non-ASCII passed through as UTF-8
//! - integers only; floats are rejected rather than formatted

use std::fmt::Write as _;

use serde_json::{Map, Number, Value};

/// Failure to encode a value canonically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A number outside `i64`/`u64` (a float).
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Encode `value` as canonical JSON bytes.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if `value` contains a float.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut out = String::new();
    encode(&mut out, value)?;
    Ok(out.into_bytes())
}

fn encode(out: &mut String, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => encode_number(out, n)?,
        Value::String(s) => encode_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode(out, item)?;
            }
            out.push(']');
        }
        Value::Object(members) => encode_object(out, members)?,
    }
    Ok(())
}

fn encode_object(out: &mut String, members: &Map<String, Value>) -> Result<(), CanonError> {
    let mut sorted: Vec<(&String, &Value)> = members.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    out.push('{');
    for (i, (key, member)) in sorted.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        encode_string(out, key);
        out.push(':');
        encode(out, member)?;
    }
    out.push('}');
    Ok(())
}

fn encode_number(out: &mut String, n: &Number) -> Result<(), CanonError> {
    if let Some(i) = n.as_i64() {
        let _ = write!(out, "{i}");
    } else if let Some(u) = n.as_u64() {
        let _ = write!(out, "{u}");
    } else {
        return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
    }
    Ok(())
}

fn encode_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
