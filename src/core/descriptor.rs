//! Raw JSON descriptor loading
//!
//! Both SDK state files (the component manifest and `sdk.opts`) are JSON
//! objects. Loading returns the untyped object map as-is; schema handling
//! belongs to [`crate::core::manifest`] and [`crate::core::options`].

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::DescriptorError;

/// Load a JSON descriptor file into an untyped object map.
///
/// The path must name an existing file whose content is a JSON object.
/// No schema coercion is performed.
pub fn load(path: &Path) -> Result<Map<String, Value>, DescriptorError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DescriptorError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(DescriptorError::IoError {
                path: path.to_path_buf(),
                error: e.to_string(),
            });
        }
    };

    let value: Value =
        serde_json::from_str(&content).map_err(|e| DescriptorError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(DescriptorError::Parse {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object at the top level, got {}", type_name(&other)),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
