//! Console and JSON reporting.

pub mod json_envelope;
pub mod progress;

use serde::Serialize;

use json_envelope::{EventType, JsonEnvelope, ResultPayload, ResultType};

/// Print a result payload as a JSON envelope on stdout.
#[allow(clippy::print_stdout, clippy::print_stderr)]
pub fn emit_json_result<T: Serialize>(result_type: ResultType, body: &T) {
    let envelope = JsonEnvelope::new(EventType::Result, ResultPayload { result_type, body });
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // Log to stderr so it doesn't corrupt JSON output stream
            eprintln!("error: failed to serialize JSON result: {e}");
        }
    }
}
