//! Loading and saving the events document.
//!
//! The document lives in two places: a canonical file under `data/generated`
//! and a web-facing mirror under `web-data`. Reads probe the canonical path
//! first and fall back to the mirror; writes go to the canonical path and are
//! then copied byte-for-byte to the mirror. If the two files have diverged,
//! whichever the probe order prefers wins silently (known limitation).
//!
//! Only the `events` field is ever replaced. All other top-level fields
//! (config, typeStyle, ...) are carried through untouched, which is why the
//! document is handled as a raw JSON map rather than a typed struct.

use crate::error::{SyncError, SyncResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical JSON path, relative to the repository root.
pub const JSON_FILE: &str = "data/generated/2026/events.json";
/// Web-facing mirror of the canonical JSON.
pub const WEB_JSON_FILE: &str = "web-data/2026/events.json";
/// Master spreadsheet path.
pub const EXCEL_FILE: &str = "data/source/2026/events_master.xlsx";

pub fn json_path(root: &Path) -> PathBuf {
    root.join(JSON_FILE)
}

pub fn web_json_path(root: &Path) -> PathBuf {
    root.join(WEB_JSON_FILE)
}

pub fn spreadsheet_path(root: &Path) -> PathBuf {
    root.join(EXCEL_FILE)
}

/// Load the document from the first existing JSON location.
/// Returns the parsed top-level object and the path it came from.
pub fn load(root: &Path) -> SyncResult<(Map<String, Value>, PathBuf)> {
    for path in [json_path(root), web_json_path(root)] {
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            let value: Value = serde_json::from_str(&text)?;
            return match value {
                Value::Object(map) => Ok((map, path)),
                other => Err(SyncError::Parse(format!(
                    "{} is not a JSON object (found {})",
                    path.display(),
                    json_type_name(&other)
                ))),
            };
        }
    }
    Err(SyncError::MissingFile(format!(
        "{} or {}",
        json_path(root).display(),
        web_json_path(root).display()
    )))
}

/// Write the document to the canonical path and copy it to the mirror,
/// creating parent directories as needed. Pretty-printed with 2-space
/// indentation; non-ASCII text is written as-is, not escaped.
pub fn save(root: &Path, document: &Map<String, Value>) -> SyncResult<()> {
    let canonical = json_path(root);
    if let Some(parent) = canonical.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(&Value::Object(document.clone()))?;
    fs::write(&canonical, text)?;

    let mirror = web_json_path(root);
    if let Some(parent) = mirror.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&canonical, &mirror)?;
    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
