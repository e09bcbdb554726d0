//! Write the single output document.

use std::io::Write;

use crate::domain::OutputRecord;
use crate::error::AppError;

/// Serialize `record` to `out` followed by a newline.
pub fn write_output(
    out: &mut dyn Write,
    record: &OutputRecord,
    pretty: bool,
) -> Result<(), AppError> {
    let text = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
