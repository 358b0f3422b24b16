use crate::OutputMode;
use jalmitr_core::canonical::stable_json_string;
use serde_json::Value;

/// JSON mode prints canonical key-sorted JSON on one line; text mode
/// pretty-prints.
pub(crate) fn emit_ok(output_mode: OutputMode, payload: &Value) -> Result<(), String> {
    if output_mode.json {
        println!(
            "{}",
            stable_json_string(payload).map_err(|e| e.to_string())?
        );
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(payload).map_err(|e| e.to_string())?
        );
    }
    Ok(())
}
