// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use tabula::domain::{LedgerEntry, create_entry};

pub const US_HEADER: &str = "Date       | Description               | Change       ";
pub const NL_HEADER: &str = "Datum      | Omschrijving              | Verandering  ";

/// Helper to build an entry from a date string that is known to be valid
pub fn entry(date: &str, description: &str, cents: i64) -> LedgerEntry {
    create_entry(date, description, cents).unwrap()
}

/// Join a header and rows the way the formatter does
pub fn table(header: &str, rows: &[&str]) -> String {
    let mut lines = vec![header];
    lines.extend_from_slice(rows);
    lines.join("\n")
}
