//! The event record shared by the spreadsheet and the JSON document.

use serde::{Deserialize, Serialize};

/// One calendar event. Field order is the key order written to
/// `events.json`, which the web front end relies on for diff-friendly output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// Phase code, e.g. `planering`.
    pub ring: String,
    /// Related phase code; only set when the event sits on the secondary line.
    pub ring_2: Option<String>,
    /// Event-type code, e.g. `beslut`.
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub description: String,
    pub responsible: String,
    pub verksamhet: bool,
    pub ekonomi: bool,
    /// `center` or `linje`, derived from `ring_2`.
    pub placering: String,
    pub visible: bool,
    /// Positional id `ev_<index>`, regenerated on every import.
    pub id: String,
}
