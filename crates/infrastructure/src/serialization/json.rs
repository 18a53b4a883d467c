//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),
}

/// Serializes a value to 2-space indented JSON bytes with a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Deserializes JSON from bytes, pretty-printed or minified.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gurl_domain::UserSettings;
    use pretty_assertions::assert_eq;

    #[test]
    fn settings_are_written_with_two_space_indent_and_newline() {
        let bytes =
            to_json_stable_bytes(&UserSettings::default()).expect("serialization should work");

        assert_eq!(
            String::from_utf8(bytes).expect("valid UTF-8"),
            "{\n  \"history_limit\": 100,\n  \"default_mode\": \"filter\"\n}\n"
        );
    }

    #[test]
    fn invalid_bytes_report_deserialize_error() {
        let result: Result<UserSettings, _> = from_json_bytes(b"{\"history_limit\": }");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
