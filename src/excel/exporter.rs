//! Spreadsheet exporter - events.json -> master .xlsx

use crate::error::{SyncError, SyncResult};
use crate::mappings::{self, SHEET_NAME};
use rust_xlsxwriter::Workbook;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const FLAG_FIELDS: &[&str] = &["visible", "verksamhet", "ekonomi"];

/// Turns the `events` array of the JSON document back into the master
/// spreadsheet: reverse-maps codes to localized labels, localizes booleans,
/// and backfills fields that older documents never carried. The `id` and
/// `placering` fields are internal and never exported.
pub struct SheetExporter {
    rows: Vec<Map<String, Value>>,
}

impl SheetExporter {
    pub fn new(events: &[Value]) -> Self {
        let rows = events
            .iter()
            .filter_map(|event| event.as_object().cloned())
            .collect();
        Self { rows }
    }

    /// Write the spreadsheet, creating parent directories as needed.
    pub fn export(&self, path: &Path) -> SyncResult<()> {
        let rows = self.localized_rows();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Only columns that at least one event carries, in the fixed order,
        // without the internal id/placering fields.
        let fields: Vec<&str> = mappings::HEADER_TABLE
            .iter()
            .map(|(_, field)| *field)
            .filter(|field| rows.iter().any(|row| row.contains_key(*field)))
            .collect();

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| SyncError::Excel(format!("Failed to set sheet name: {}", e)))?;

        for (col, field) in fields.iter().enumerate() {
            let header = mappings::header_for(field).unwrap_or(field);
            worksheet
                .write_string(0, col as u16, header)
                .map_err(|e| SyncError::Excel(format!("Failed to write header: {}", e)))?;
        }

        for (row_idx, row) in rows.iter().enumerate() {
            for (col, field) in fields.iter().enumerate() {
                write_cell(worksheet, (row_idx + 1) as u32, col as u16, row.get(*field))?;
            }
        }

        workbook
            .save(path)
            .map_err(|e| SyncError::Excel(format!("Failed to save spreadsheet: {}", e)))?;
        Ok(())
    }

    /// Apply the full export transform to a copy of the rows.
    fn localized_rows(&self) -> Vec<Map<String, Value>> {
        let mut rows = self.rows.clone();
        backfill_placement(&mut rows);
        backfill_related_ring(&mut rows);
        clear_center_ring_2(&mut rows);
        reverse_map_codes(&mut rows);
        localize_flags(&mut rows);
        rows
    }
}

fn label_has_marker(row: &Map<String, Value>) -> bool {
    row.get("label")
        .and_then(Value::as_str)
        .is_some_and(|label| label.contains(mappings::LINE_MARKER))
}

/// Documents written before `placering` existed: default everything to
/// center, except the long-term plan events recognized by their label.
fn backfill_placement(rows: &mut [Map<String, Value>]) {
    if rows.iter().any(|row| row.contains_key("placering")) {
        return;
    }
    for row in rows.iter_mut() {
        let placement = if label_has_marker(row) {
            mappings::PLACEMENT_LINE
        } else {
            mappings::PLACEMENT_CENTER
        };
        row.insert("placering".to_string(), Value::String(placement.to_string()));
    }
}

/// Documents written before `ring_2` existed: null everywhere, except the
/// long-term plan events which move to the long-term ring with a related
/// planning phase.
fn backfill_related_ring(rows: &mut [Map<String, Value>]) {
    if rows.iter().any(|row| row.contains_key("ring_2")) {
        return;
    }
    for row in rows.iter_mut() {
        row.insert("ring_2".to_string(), Value::Null);
        if label_has_marker(row) {
            row.insert(
                "ring".to_string(),
                Value::String(mappings::LONG_TERM_RING.to_string()),
            );
            row.insert(
                "ring_2".to_string(),
                Value::String(mappings::DEFAULT_RING.to_string()),
            );
        }
    }
}

/// A centered event never has a related phase.
fn clear_center_ring_2(rows: &mut [Map<String, Value>]) {
    for row in rows.iter_mut() {
        let centered = row
            .get("placering")
            .and_then(Value::as_str)
            .is_some_and(|p| p == mappings::PLACEMENT_CENTER);
        if centered {
            row.insert("ring_2".to_string(), Value::Null);
        }
    }
}

fn reverse_map_codes(rows: &mut [Map<String, Value>]) {
    for row in rows.iter_mut() {
        remap(row, "ring", mappings::ring_label);
        remap(row, "ring_2", mappings::ring_label);
        remap(row, "type", mappings::type_label);
    }
}

fn remap(row: &mut Map<String, Value>, field: &str, lookup: fn(&str) -> String) {
    if let Some(Value::String(code)) = row.get(field) {
        let label = lookup(code);
        row.insert(field.to_string(), Value::String(label));
    }
}

/// Booleans become localized yes/no words. A column is localized for all
/// rows as soon as any row carries it; missing or null flags read as no.
fn localize_flags(rows: &mut [Map<String, Value>]) {
    for field in FLAG_FIELDS {
        if !rows.iter().any(|row| row.contains_key(*field)) {
            continue;
        }
        for row in rows.iter_mut() {
            let flag = row.get(*field).and_then(Value::as_bool).unwrap_or(false);
            row.insert(
                (*field).to_string(),
                Value::String(mappings::yes_no(flag).to_string()),
            );
        }
    }
}

fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<&Value>,
) -> SyncResult<()> {
    let result = match value {
        Some(Value::String(s)) => worksheet.write_string(row, col, s).map(|_| ()),
        Some(Value::Number(n)) => worksheet
            .write_number(row, col, n.as_f64().unwrap_or(0.0))
            .map(|_| ()),
        Some(Value::Bool(b)) => worksheet.write_boolean(row, col, *b).map(|_| ()),
        // Null or absent: leave the cell empty.
        _ => return Ok(()),
    };
    result.map_err(|e| SyncError::Excel(format!("Failed to write cell: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows_from(events: Value) -> Vec<Map<String, Value>> {
        events
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_backfill_placement_for_legacy_rows() {
        let mut rows = rows_from(json!([
            {"label": "Budget"},
            {"label": "Inriktningsverksamhetsplan 2027"},
            {"ring": "manad"}
        ]));

        backfill_placement(&mut rows);

        assert_eq!(rows[0]["placering"], json!("center"));
        assert_eq!(rows[1]["placering"], json!("linje"));
        // Missing label counts as no match.
        assert_eq!(rows[2]["placering"], json!("center"));
    }

    #[test]
    fn test_backfill_placement_skipped_when_any_row_has_it() {
        let mut rows = rows_from(json!([
            {"label": "A", "placering": "linje"},
            {"label": "B"}
        ]));

        backfill_placement(&mut rows);

        assert!(!rows[1].contains_key("placering"));
    }

    #[test]
    fn test_backfill_related_ring_for_legacy_rows() {
        let mut rows = rows_from(json!([
            {"label": "Budget", "ring": "planering"},
            {"label": "Inriktningsverksamhetsplan", "ring": "planering"}
        ]));

        backfill_related_ring(&mut rows);

        assert_eq!(rows[0]["ring_2"], Value::Null);
        assert_eq!(rows[0]["ring"], json!("planering"));
        assert_eq!(rows[1]["ring"], json!("langtidsplanering"));
        assert_eq!(rows[1]["ring_2"], json!("planering"));
    }

    #[test]
    fn test_center_rows_lose_ring_2() {
        let mut rows = rows_from(json!([
            {"placering": "center", "ring_2": "planering"},
            {"placering": "linje", "ring_2": "planering"}
        ]));

        clear_center_ring_2(&mut rows);

        assert_eq!(rows[0]["ring_2"], Value::Null);
        assert_eq!(rows[1]["ring_2"], json!("planering"));
    }

    #[test]
    fn test_reverse_map_codes_with_identity_fallback() {
        let mut rows = rows_from(json!([
            {"ring": "uppfoljning_och_analys", "ring_2": null, "type": "dialog_enskild"},
            {"ring": "sommarpaus", "type": "workshop"}
        ]));

        reverse_map_codes(&mut rows);

        assert_eq!(rows[0]["ring"], json!("Uppföljning och analys"));
        assert_eq!(rows[0]["ring_2"], Value::Null);
        assert_eq!(rows[0]["type"], json!("Dialog enskild"));
        assert_eq!(rows[1]["ring"], json!("sommarpaus"));
        assert_eq!(rows[1]["type"], json!("workshop"));
    }

    #[test]
    fn test_localize_flags() {
        let mut rows = rows_from(json!([
            {"visible": true, "verksamhet": false},
            {"visible": false}
        ]));

        localize_flags(&mut rows);

        assert_eq!(rows[0]["visible"], json!("Ja"));
        assert_eq!(rows[0]["verksamhet"], json!("Nej"));
        assert_eq!(rows[1]["visible"], json!("Nej"));
        // Column present in row 0 only: row 1 is filled with the negative word.
        assert_eq!(rows[1]["verksamhet"], json!("Nej"));
        // Column absent everywhere stays absent.
        assert!(!rows[0].contains_key("ekonomi"));
    }

    #[test]
    fn test_localized_rows_full_transform() {
        let exporter = SheetExporter::new(&[json!({
            "date": "2026-03-14",
            "ring": "planering",
            "ring_2": null,
            "type": "beslut",
            "label": "X",
            "placering": "center",
            "visible": true,
            "id": "ev_0"
        })]);

        let rows = exporter.localized_rows();

        assert_eq!(rows[0]["ring"], json!("Planering"));
        assert_eq!(rows[0]["type"], json!("Beslut"));
        assert_eq!(rows[0]["ring_2"], Value::Null);
        assert_eq!(rows[0]["visible"], json!("Ja"));
    }
}
