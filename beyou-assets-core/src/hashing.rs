//! Hashing - SHA-256 over written artifacts
//!
//! A run digest lets two runs be compared without diffing every file.

use serde::Serialize;
use serde_json::{to_string, Value};
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut sorted: Vec<_> = map.iter().collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));
            let sorted_map: serde_json::Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_value(v)))
                .collect();
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

#[derive(Serialize)]
struct DigestEntry<'a> {
    path: &'a str,
    sha256: &'a str,
}

/// Digest over `(relative path, sha256)` pairs, in the order given.
pub fn compute_run_digest<'a, I>(entries: I) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let entries: Vec<_> = entries
        .into_iter()
        .map(|(path, sha256)| DigestEntry { path, sha256 })
        .collect();
    let canonical = canonical_json(&entries)?;
    Ok(sha256_hex(canonical.as_bytes()))
}
