//! Input document reading and validation.
//!
//! The whole document is read before anything is parsed, so a failure never
//! leaves a half-consumed stream behind.

use std::fs;
use std::io::Read;

use serde_json::Value;

use crate::domain::{InputRecord, InputSource};
use crate::error::AppError;

/// Read the raw input document from the configured source.
///
/// `stdin` is only touched for `InputSource::Stdin`.
pub fn read_document(source: &InputSource, stdin: &mut dyn Read) -> Result<String, AppError> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => fs::read_to_string(path).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("'{}': {e}", path.display()),
            ))
        }),
    }
}

/// Parse an input document into a record.
///
/// The top level must be a JSON object; serde would otherwise read an array as
/// the struct's fields in order. Length checks are left to [`validate`].
pub fn parse_input(text: &str) -> Result<InputRecord, AppError> {
    let doc: Value = serde_json::from_str(text)?;
    if !doc.is_object() {
        return Err(AppError::schema(format!(
            "expected a JSON object with keys `days` and `amounts`, got {}",
            kind_name(&doc)
        )));
    }
    Ok(serde_json::from_value(doc)?)
}

fn kind_name(doc: &Value) -> &'static str {
    match doc {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Check the record invariants: both series non-empty and of equal length.
pub fn validate(record: &InputRecord) -> Result<(), AppError> {
    if record.days.is_empty() || record.amounts.is_empty() {
        return Err(AppError::schema(format!(
            "days and amounts must be non-empty (got {} days, {} amounts)",
            record.days.len(),
            record.amounts.len()
        )));
    }
    if record.days.len() != record.amounts.len() {
        return Err(AppError::schema(format!(
            "days and amounts must have the same length (got {} days, {} amounts)",
            record.days.len(),
            record.amounts.len()
        )));
    }
    Ok(())
}
