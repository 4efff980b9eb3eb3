//! JSON envelope for `--json` output

use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Write `{"ok": true, "data": ...}` as pretty JSON followed by a newline
pub fn write_json<T: Serialize>(out: &mut impl Write, data: T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
    writeln!(out, "{}", text)?;
    Ok(())
}
