use std::io::Write;

use serde_json::Value;

use crate::error::CliError;

/// Writes `document` to stdout as one JSON value followed by a newline.
pub fn render(document: &Value, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, document, pretty)?;
    handle.flush()?;
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, document: &Value, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, document)?;
    } else {
        serde_json::to_writer(&mut *writer, document)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
