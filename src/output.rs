//! Proof rendering for stdout.

use serde_json::Value;

/// How a proof is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Unquoted when the proof is a JSON string, compact JSON otherwise.
    Raw,
    /// Two-space indented JSON.
    Pretty,
}

impl OutputMode {
    /// Pretty only in debug mode without `--raw`; scripts get raw output.
    pub const fn select(debug: bool, raw: bool) -> Self {
        if debug && !raw {
            OutputMode::Pretty
        } else {
            OutputMode::Raw
        }
    }
}

/// Render `proof` for printing.
pub fn render_proof(proof: &Value, mode: OutputMode) -> Result<String, serde_json::Error> {
    match (mode, proof) {
        (OutputMode::Raw, Value::String(s)) => Ok(s.clone()),
        (OutputMode::Raw, other) => serde_json::to_string(other),
        (OutputMode::Pretty, other) => serde_json::to_string_pretty(other),
    }
}
