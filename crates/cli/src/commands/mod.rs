//! CLI commands

pub mod render;
pub mod validate;

use std::fs;

use crate::error::{CliError, CliResult};

/// Read a JSON argument given inline or as `@path`.
pub(crate) fn read_json_arg(arg: &str) -> CliResult<serde_json::Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::Message(format!("Failed to read {path}: {e}")))?,
        None => arg.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| CliError::Message(format!("Invalid JSON: {e}")))
}
