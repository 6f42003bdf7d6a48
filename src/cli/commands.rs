//! CLI command handlers

use crate::document;
use crate::error::SyncResult;
use crate::excel::{SheetExporter, SheetImporter};
use colored::Colorize;
use serde_json::Value;
use std::path::Path;

/// Default mode: read the master spreadsheet and rewrite the `events` field
/// of the JSON document, leaving every other top-level field untouched.
pub fn update_json(root: &Path) -> SyncResult<()> {
    println!(
        "{}",
        "🔄 Updating events.json from the master spreadsheet".bold().green()
    );

    let events = SheetImporter::new(document::spreadsheet_path(root)).import()?;
    let (mut doc, _source) = document::load(root)?;
    doc.insert("events".to_string(), serde_json::to_value(&events)?);
    document::save(root, &doc)?;

    println!(
        "{} {} events written to {} and mirrored to {}",
        "✅ Done!".bold().green(),
        events.len(),
        document::json_path(root).display(),
        document::web_json_path(root).display()
    );
    Ok(())
}

/// `--init` mode: rebuild the master spreadsheet from the current JSON
/// events, localizing codes and backfilling fields older documents lack.
pub fn init_spreadsheet(root: &Path) -> SyncResult<()> {
    println!(
        "{}",
        "🔄 Creating the master spreadsheet from events.json".bold().green()
    );

    let (doc, source) = document::load(root)?;
    let events = doc
        .get("events")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let path = document::spreadsheet_path(root);
    SheetExporter::new(&events).export(&path)?;

    println!(
        "{} Spreadsheet created: {} ({} events, from {})",
        "✅ Done!".bold().green(),
        path.display(),
        events.len(),
        source.display()
    );
    Ok(())
}
