//! Spreadsheet import/export for the master event list.
//!
//! - Import: master .xlsx -> internal event records (for events.json)
//! - Export: events.json -> master .xlsx with localized headers

mod exporter;
mod importer;

pub use exporter::SheetExporter;
pub use importer::SheetImporter;
