use crate::domain::{ConfigurationError, LedgerEntry, LocaleProfile, format_row, header_for};

/// Render entries as a table for the given currency and locale.
///
/// The locale is validated before the (currency, locale) pair, so an
/// unknown locale always reports `InvalidLocale`. The result has one line per
/// header/entry and no trailing newline.
pub fn format(
    currency: &str,
    locale: &str,
    entries: &[LedgerEntry],
) -> Result<String, ConfigurationError> {
    let mut formatted = header_for(locale)?.to_string();
    let profile = LocaleProfile::resolve(currency, locale)?;

    for entry in sort_entries(entries) {
        formatted.push('\n');
        formatted.push_str(&format_row(&profile, entry));
    }

    Ok(formatted)
}

/// Negative entries first, then zero or positive ones. Each group is ordered
/// by `sort_key` ignoring case, lowercase first when keys differ only in
/// case, and ties keep their input order.
pub fn sort_entries(entries: &[LedgerEntry]) -> Vec<&LedgerEntry> {
    let mut sorted: Vec<&LedgerEntry> = entries.iter().collect();
    sorted.sort_by_cached_key(|entry| {
        let key = sort_key(entry);
        (key.to_lowercase(), swap_case(&key))
    });

    let (mut negative, positive): (Vec<_>, Vec<_>) =
        sorted.into_iter().partition(|entry| entry.is_negative());
    negative.extend(positive);
    negative
}

/// `date@description@change`, with the date as `MM/dd/yyyy HH:mm:ss`.
/// Keys compare as plain strings, so dates order by month before year and a
/// `@` inside a description shifts the fields that follow it.
pub fn sort_key(entry: &LedgerEntry) -> String {
    format!(
        "{} 00:00:00@{}@{}",
        entry.date().format("%m/%d/%Y"),
        entry.description(),
        entry.change()
    )
}

fn swap_case(key: &str) -> String {
    key.chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}
