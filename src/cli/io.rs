//! JSON output for one-shot CLI commands
//!
//! One JSON object per line on stdout.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Wrap `data` in a success envelope
pub fn success_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &success_envelope(data))?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
