//! Spreadsheet importer - master .xlsx -> event records

use crate::error::{SyncError, SyncResult};
use crate::event::Event;
use crate::mappings::{self, SHEET_NAME};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads the named sheet of the master spreadsheet and converts every data
/// row into an [`Event`]. Columns are matched by their localized header;
/// unrecognized columns are ignored so extra working columns in the
/// spreadsheet never break an import.
pub struct SheetImporter {
    path: PathBuf,
}

impl SheetImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import all rows, in sheet order. Fails before producing any event if
    /// the file is missing, the sheet is missing, or any date cell cannot be
    /// parsed; the caller writes nothing in that case.
    pub fn import(&self) -> SyncResult<Vec<Event>> {
        if !self.path.exists() {
            return Err(SyncError::MissingFile(self.path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| SyncError::Excel(format!("Failed to open spreadsheet: {}", e)))?;
        let range = workbook.worksheet_range(SHEET_NAME).map_err(|e| {
            SyncError::Excel(format!("Failed to read sheet '{}': {}", SHEET_NAME, e))
        })?;

        let columns = header_columns(&range);
        let (height, _) = range.get_size();

        let mut events = Vec::new();
        for row in 1..height {
            let index = events.len();
            events.push(convert_row(&range, &columns, row, index)?);
        }
        Ok(events)
    }
}

/// Map internal field names to their column index, from the header row.
fn header_columns(range: &Range<Data>) -> HashMap<&'static str, usize> {
    let (_, width) = range.get_size();
    let mut columns = HashMap::new();
    for col in 0..width {
        if let Some(Data::String(header)) = range.get((0, col)) {
            if let Some(field) = mappings::internal_field(header.trim()) {
                columns.insert(field, col);
            }
        }
    }
    columns
}

fn convert_row(
    range: &Range<Data>,
    columns: &HashMap<&'static str, usize>,
    row: usize,
    index: usize,
) -> SyncResult<Event> {
    let cell = |field: &str| -> Option<&Data> {
        columns.get(field).and_then(|&col| range.get((row, col)))
    };
    let text = |field: &str| -> String { cell(field).map(cell_text).unwrap_or_default() };

    let date = parse_date(cell("date"), row)?;

    let ring_raw = text("ring");
    let ring = if mappings::is_blank(&ring_raw) {
        mappings::DEFAULT_RING.to_string()
    } else {
        mappings::ring_code(&ring_raw)
    };

    let ring_2_raw = text("ring_2");
    let ring_2 = if mappings::is_blank(&ring_2_raw) {
        None
    } else {
        Some(mappings::ring_code(&ring_2_raw))
    };

    let kind_raw = text("type");
    let kind = if mappings::is_blank(&kind_raw) {
        mappings::DEFAULT_TYPE.to_string()
    } else {
        mappings::type_code(&kind_raw)
    };

    // An event sits on the secondary line exactly when it has a related phase.
    let placering = if ring_2.is_some() {
        mappings::PLACEMENT_LINE
    } else {
        mappings::PLACEMENT_CENTER
    };

    Ok(Event {
        date,
        ring,
        ring_2,
        kind,
        label: default_text(text("label")),
        description: default_text(text("description")),
        responsible: default_text(text("responsible")),
        verksamhet: parse_yes(cell("verksamhet")),
        ekonomi: parse_yes(cell("ekonomi")),
        placering: placering.to_string(),
        visible: parse_yes(cell("visible")),
        id: format!("ev_{}", index),
    })
}

fn default_text(value: String) -> String {
    if mappings::is_blank(&value) {
        String::new()
    } else {
        value
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accepts native Excel datetime cells and `YYYY-MM-DD` text cells.
/// Anything else aborts the whole import.
fn parse_date(cell: Option<&Data>, row: usize) -> SyncResult<String> {
    let malformed = |value: String| SyncError::MalformedDate { row, value };
    match cell {
        Some(Data::DateTime(dt)) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .ok_or_else(|| malformed(dt.as_f64().to_string())),
        Some(Data::DateTimeIso(s)) => {
            let date_part = s.get(..10).unwrap_or(s.as_str());
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(|d| d.format("%Y-%m-%d").to_string())
                .map_err(|_| malformed(s.clone()))
        }
        Some(Data::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(|d| d.format("%Y-%m-%d").to_string())
            .map_err(|_| malformed(s.clone())),
        Some(other) => Err(malformed(cell_text(other))),
        None => Err(malformed(String::new())),
    }
}

/// Text cells must match the affirmative word; real boolean cells keep their
/// value. Everything else, including empty, is false.
fn parse_yes(cell: Option<&Data>) -> bool {
    match cell {
        Some(Data::Bool(b)) => *b,
        Some(other) => mappings::is_yes(&cell_text(other)),
        None => false,
    }
}
