//! Lookup tables between the localized spreadsheet schema and the internal
//! JSON schema used by the web front end.
//!
//! All value lookups are bidirectional with identity fallback: a label or
//! code that is not in the table passes through unchanged, so new values in
//! either schema survive a round trip instead of crashing the conversion.

/// Sheet name of the master spreadsheet.
pub const SHEET_NAME: &str = "Verksamhetscykel";

/// Localized yes/no words used for the boolean columns.
pub const YES: &str = "Ja";
pub const NO: &str = "Nej";

/// Label substring that marks an event as belonging on the secondary line.
/// Used to backfill `placering`/`ring_2` for documents written before those
/// fields existed.
pub const LINE_MARKER: &str = "Inriktningsverksamhetsplan";

/// Placement values.
pub const PLACEMENT_CENTER: &str = "center";
pub const PLACEMENT_LINE: &str = "linje";

/// Default codes applied when a cell is empty.
pub const DEFAULT_RING: &str = "planering";
pub const DEFAULT_TYPE: &str = "beslut";

/// Ring codes used by the legacy `ring_2` backfill on export.
pub const LONG_TERM_RING: &str = "langtidsplanering";

/// Phase labels (spreadsheet) -> phase codes (JSON).
const RING_TABLE: &[(&str, &str)] = &[
    ("Planering", "planering"),
    ("Uppföljning och analys", "uppfoljning_och_analys"),
    ("Långtidsplanering", "langtidsplanering"),
    ("Genomförande och uppföljning", "genomforande_och_uppfoljning"),
    ("Månad", "manad"),
];

/// Event-type labels (spreadsheet) -> type codes (JSON).
const TYPE_TABLE: &[(&str, &str)] = &[
    ("Beslut", "beslut"),
    ("Inlämning", "inlamning"),
    ("Dialog gemensam", "dialog_gemensam"),
    ("Dialog enskild", "dialog_enskild"),
    ("Omvärldsanalys", "omvarldsanalys"),
];

/// Spreadsheet headers -> internal field names, in spreadsheet column order.
/// This order is also the export column order.
pub const HEADER_TABLE: &[(&str, &str)] = &[
    ("Cykeldatum", "date"),
    ("Styrningsfas", "ring"),
    ("Relaterad styrningsfas", "ring_2"),
    ("Typ", "type"),
    ("Styrningsunderlag förkortning", "label"),
    ("Styrningsunderlag", "description"),
    ("Ansvarig", "responsible"),
    ("Verksamhet", "verksamhet"),
    ("Ekonomi", "ekonomi"),
    ("Synlig", "visible"),
];

fn forward(table: &[(&str, &str)], value: &str) -> String {
    let trimmed = value.trim();
    table
        .iter()
        .find(|(label, _)| *label == trimmed)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_else(|| value.to_string())
}

fn reverse(table: &[(&str, &str)], value: &str) -> String {
    table
        .iter()
        .find(|(_, code)| *code == value)
        .map(|(label, _)| (*label).to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Phase label -> phase code (trimmed before lookup, identity fallback).
pub fn ring_code(label: &str) -> String {
    forward(RING_TABLE, label)
}

/// Phase code -> phase label (identity fallback).
pub fn ring_label(code: &str) -> String {
    reverse(RING_TABLE, code)
}

/// Type label -> type code (trimmed before lookup, identity fallback).
pub fn type_code(label: &str) -> String {
    forward(TYPE_TABLE, label)
}

/// Type code -> type label (identity fallback).
pub fn type_label(code: &str) -> String {
    reverse(TYPE_TABLE, code)
}

/// Internal field name for a spreadsheet header, if the header is recognized.
pub fn internal_field(header: &str) -> Option<&'static str> {
    HEADER_TABLE
        .iter()
        .find(|(h, _)| *h == header)
        .map(|(_, field)| *field)
}

/// Localized header for an internal field name.
pub fn header_for(field: &str) -> Option<&'static str> {
    HEADER_TABLE
        .iter()
        .find(|(_, f)| *f == field)
        .map(|(h, _)| *h)
}

/// Unified is-empty-or-null predicate. Tabular tools leak "NaN"/"None"
/// tokens into text cells, so those count as absent too.
pub fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("none")
}

/// True when a cell text matches the affirmative word, trimmed and
/// case-insensitive. Everything else, including empty, is false.
pub fn is_yes(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(YES)
}

/// Boolean -> localized yes/no word.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        YES
    } else {
        NO
    }
}
