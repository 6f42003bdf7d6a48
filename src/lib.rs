//! Styrcykel - sync between the governance-cycle master spreadsheet and the
//! web calendar's events.json.
//!
//! The master event list is maintained in a localized .xlsx spreadsheet.
//! This crate converts it to the internal JSON schema consumed by the web
//! front end, and back:
//!
//! - Import: spreadsheet rows -> event records (renamed columns, mapped enum
//!   codes, derived placement, defaults, positional ids), merged into the
//!   existing JSON document and mirrored to the web data directory.
//! - Export: JSON events -> spreadsheet rows with localized headers and
//!   labels, backfilling fields that older documents never carried.
//!
//! # Example
//!
//! ```no_run
//! use styrcykel::cli;
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! cli::update_json(root)?;
//! # Ok::<(), styrcykel::SyncError>(())
//! ```

pub mod cli;
pub mod document;
pub mod error;
pub mod event;
pub mod excel;
pub mod mappings;

// Re-export commonly used types
pub use error::{SyncError, SyncResult};
pub use event::Event;
