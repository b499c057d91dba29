//! Versioned envelope wrapped around every persisted payload.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Version for [`StateEnvelope`] metadata serialization.
pub const STATE_ENVELOPE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Versioned envelope for persisted state payloads.
pub struct StateEnvelope {
    /// Envelope schema version.
    pub envelope_version: u32,
    /// Storage key the envelope belongs to.
    pub key: String,
    /// Owner-defined schema version for the payload.
    pub schema_version: u32,
    /// Last update time in unix milliseconds.
    pub updated_at_unix_ms: u64,
    /// Serialized payload.
    pub payload: Value,
}

impl StateEnvelope {
    /// Creates a new envelope stamped with a monotonic timestamp.
    pub fn new(key: impl Into<String>, schema_version: u32, payload: Value) -> Self {
        Self {
            envelope_version: STATE_ENVELOPE_VERSION,
            key: key.into(),
            schema_version,
            updated_at_unix_ms: crate::time::next_monotonic_timestamp_ms(),
            payload,
        }
    }
}

/// Builds a versioned [`StateEnvelope`] from a serializable payload.
///
/// # Errors
///
/// Returns an error when `payload` cannot be converted to JSON.
pub fn build_state_envelope<T: Serialize>(
    key: &str,
    schema_version: u32,
    payload: &T,
) -> Result<StateEnvelope, String> {
    let payload = serde_json::to_value(payload).map_err(|e| e.to_string())?;
    Ok(StateEnvelope::new(key.to_string(), schema_version, payload))
}

/// Deserializes an envelope payload into a target type.
///
/// # Errors
///
/// Returns an error when deserialization fails.
pub fn migrate_envelope_payload<T: DeserializeOwned>(envelope: &StateEnvelope) -> Result<T, String> {
    serde_json::from_value(envelope.payload.clone()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_serialization_shape_is_stable() {
        let envelope = StateEnvelope {
            envelope_version: STATE_ENVELOPE_VERSION,
            key: "zipmind.project.v1".to_string(),
            schema_version: 2,
            updated_at_unix_ms: 1234,
            payload: json!({"ok": true}),
        };

        let value = serde_json::to_value(&envelope).expect("serialize envelope");
        let object = value.as_object().expect("object");
        assert_eq!(object.get("envelope_version"), Some(&json!(1)));
        assert_eq!(object.get("key"), Some(&json!("zipmind.project.v1")));
        assert_eq!(object.get("schema_version"), Some(&json!(2)));
        assert_eq!(object.get("updated_at_unix_ms"), Some(&json!(1234)));
        assert_eq!(object.get("payload"), Some(&json!({"ok": true})));
    }

    #[test]
    fn envelope_new_uses_monotonic_timestamps() {
        let first = StateEnvelope::new("k", 1, json!({"n": 1}));
        let second = StateEnvelope::new("k", 1, json!({"n": 2}));
        assert!(second.updated_at_unix_ms > first.updated_at_unix_ms);
    }

    #[test]
    fn build_and_migrate_round_trip() {
        let envelope = build_state_envelope("k", 1, &json!({"answer": 42})).expect("build");
        let payload: Value = migrate_envelope_payload(&envelope).expect("migrate");
        assert_eq!(payload, json!({"answer": 42}));
    }

    #[test]
    fn migrate_errors_on_type_mismatch() {
        let envelope = build_state_envelope("k", 1, &json!("text")).expect("build");
        let err = migrate_envelope_payload::<u32>(&envelope).expect_err("expected mismatch");
        assert!(!err.is_empty());
    }
}
