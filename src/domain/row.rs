use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::{DateOrder, LedgerEntry, LocaleProfile, format_currency};

pub const DESCRIPTION_WIDTH: usize = 25;
pub const CHANGE_WIDTH: usize = 13;

pub fn format_date(profile: &LocaleProfile, date: NaiveDate) -> String {
    let sep = profile.locale.date_separator();
    match profile.date_order {
        DateOrder::MonthDayYear => format!(
            "{:02}{sep}{:02}{sep}{:04}",
            date.month(),
            date.day(),
            date.year()
        ),
        DateOrder::DayMonthYear => format!(
            "{:02}{sep}{:02}{sep}{:04}",
            date.day(),
            date.month(),
            date.year()
        ),
    }
}

/// Cut descriptions longer than the column to 22 chars plus "...".
pub fn format_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_WIDTH {
        let mut truncated: String = description.chars().take(DESCRIPTION_WIDTH - 3).collect();
        truncated.push_str("...");
        truncated
    } else {
        description.to_string()
    }
}

/// Non-negative amounts get a trailing space so they line up with the
/// closing parenthesis of negative ones.
pub fn format_change(profile: &LocaleProfile, change: Decimal) -> String {
    let formatted = format_currency(change, profile);
    if change < Decimal::ZERO {
        formatted
    } else {
        formatted + " "
    }
}

pub fn format_row(profile: &LocaleProfile, entry: &LedgerEntry) -> String {
    format!(
        "{} | {:<dw$} | {:>cw$}",
        format_date(profile, entry.date()),
        format_description(entry.description()),
        format_change(profile, entry.change()),
        dw = DESCRIPTION_WIDTH,
        cw = CHANGE_WIDTH,
    )
}
