//! Response envelopes returned by every Postlane endpoint.
//!
//! The `success` and `error` markers are part of the wire format but carry no
//! information: whether a call succeeded is decided by the HTTP status code.

use serde::{Deserialize, Serialize};

/// A successful response wrapping a single resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Always `true` on the wire.
    #[serde(default)]
    pub success: bool,
    /// The decoded resource.
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Wrap a resource the way the API does.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Unwrap the resource.
    pub fn into_data(self) -> T {
        self.data
    }
}

/// A successful response with no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyEnvelope {
    /// Always `true` on the wire.
    #[serde(default)]
    pub success: bool,
}

impl EmptyEnvelope {
    /// The acknowledgement the API sends for side-effecting calls.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `true` on the wire.
    #[serde(default)]
    pub error: bool,
    /// Human-readable failure reason.
    pub reason: String,
}

impl ErrorEnvelope {
    /// Build the failure body the API sends alongside a non-2xx status.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            error: true,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_envelope_wire_shape() {
        let envelope = DataEnvelope::new(json!({"id": "c_1"}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"success": true, "data": {"id": "c_1"}}));
    }

    #[test]
    fn test_empty_envelope_decodes() {
        let envelope: EmptyEnvelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(envelope, EmptyEnvelope::ok());
    }

    #[test]
    fn test_error_envelope_without_marker() {
        // Some gateways drop the marker; only the reason matters.
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"reason":"Unauthorized"}"#).unwrap();
        assert_eq!(envelope.reason, "Unauthorized");
        assert!(!envelope.error);
    }

    #[test]
    fn test_error_envelope_wire_shape() {
        let value = serde_json::to_value(ErrorEnvelope::new("Not found")).unwrap();
        assert_eq!(value, json!({"error": true, "reason": "Not found"}));
    }
}
