//! JSON envelope types for CLI output.
//!
//! With `--json`, the final result of a command is printed to stdout as a
//! single envelope so scripts can consume it without scraping log lines.

use serde::Serialize;

/// Envelope format version.
pub const SPEC_VERSION: &str = "1.0";

/// JSON envelope wrapping CLI output events.
#[derive(Debug, Serialize)]
pub struct JsonEnvelope<T> {
    /// API specification version.
    pub spec_version: &'static str,
    /// Event type.
    pub event: EventType,
    /// Event-specific payload.
    pub payload: T,
}

impl<T: Serialize> JsonEnvelope<T> {
    /// Create a new envelope.
    pub fn new(event: EventType, payload: T) -> Self {
        Self {
            spec_version: SPEC_VERSION,
            event,
            payload,
        }
    }
}

/// Event types for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Final result.
    Result,
}

/// Result type discriminator for result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Extraction run.
    Extraction,
    /// Dry-run plan.
    Plan,
    /// Output verification.
    Verification,
    /// Configuration display.
    Config,
}

/// Result payload tagged with its type.
#[derive(Debug, Serialize)]
pub struct ResultPayload<'a, T> {
    /// Kind of result.
    pub result_type: ResultType,
    /// Result body.
    #[serde(flatten)]
    pub body: &'a T,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Serialize)]
    struct Body {
        written: usize,
    }

    #[test]
    fn test_envelope_shape() {
        let body = Body { written: 3 };
        let envelope = JsonEnvelope::new(
            EventType::Result,
            ResultPayload {
                result_type: ResultType::Extraction,
                body: &body,
            },
        );

        let value: Value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "spec_version": "1.0",
                "event": "result",
                "payload": { "result_type": "extraction", "written": 3 }
            })
        );
    }
}
