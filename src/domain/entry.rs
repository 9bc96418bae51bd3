use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

use super::{Cents, to_major_units};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid date: '{0}'")]
pub struct ParseDateError(pub String);

/// One ledger line. The amount is supplied in cents and stored in major
/// units; entries never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    date: NaiveDate,
    description: String,
    change: Decimal,
}

impl LedgerEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>, cents: Cents) -> Self {
        Self {
            date,
            description: description.into(),
            change: to_major_units(cents),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Amount in major units, e.g. 250 cents -> 2.50
    pub fn change(&self) -> Decimal {
        self.change
    }

    pub fn is_negative(&self) -> bool {
        self.change < Decimal::ZERO
    }
}

/// Build an entry from a locale-invariant date string.
pub fn create_entry(
    date: &str,
    description: &str,
    cents: Cents,
) -> Result<LedgerEntry, ParseDateError> {
    Ok(LedgerEntry::new(parse_date(date)?, description, cents))
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` and
/// `MM/DD/YYYY`. Time of day is dropped.
pub fn parse_date(input: &str) -> Result<NaiveDate, ParseDateError> {
    let trimmed = input.trim();

    for pattern in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, pattern) {
            return Ok(date);
        }
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(datetime.date());
        }
    }

    Err(ParseDateError(input.to_string()))
}
