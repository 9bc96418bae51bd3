mod common;

use anyhow::Result;
use common::{NL_HEADER, US_HEADER, entry, table};
use tabula::domain::{ConfigurationError, create_entry};

#[test]
fn test_empty_ledger_is_header_only() -> Result<()> {
    assert_eq!(tabula::format("USD", "en-US", &[])?, US_HEADER);
    assert_eq!(tabula::format("EUR", "en-US", &[])?, US_HEADER);
    assert_eq!(tabula::format("EUR", "nl-NL", &[])?, NL_HEADER);
    assert_eq!(tabula::format("USD", "nl-NL", &[])?, NL_HEADER);
    Ok(())
}

#[test]
fn test_single_positive_entry() -> Result<()> {
    let entries = vec![entry("2015-01-21", "Gift", 250)];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &["01/21/2015 | Gift                      |        $2.50 "]
        )
    );
    Ok(())
}

#[test]
fn test_one_negative_entry() -> Result<()> {
    let entries = vec![entry("2015-01-01", "Buy present", -1000)];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &["01/01/2015 | Buy present               |      ($10.00)"]
        )
    );
    Ok(())
}

#[test]
fn test_entries_sorted_by_date() -> Result<()> {
    let entries = vec![
        entry("2015-01-02", "Get present", 1000),
        entry("2015-01-01", "Buy present", -1000),
    ];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &[
                "01/01/2015 | Buy present               |      ($10.00)",
                "01/02/2015 | Get present               |       $10.00 ",
            ]
        )
    );
    Ok(())
}

#[test]
fn test_final_order_tie_breaker_is_change() -> Result<()> {
    let entries = vec![
        entry("2015-01-01", "Something", 0),
        entry("2015-01-01", "Something", -1),
        entry("2015-01-01", "Something", 1),
    ];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &[
                "01/01/2015 | Something                 |       ($0.01)",
                "01/01/2015 | Something                 |        $0.00 ",
                "01/01/2015 | Something                 |        $0.01 ",
            ]
        )
    );
    Ok(())
}

#[test]
fn test_negatives_before_positives() -> Result<()> {
    let entries = vec![
        entry("2015-01-01", "Same", -500),
        entry("2015-01-01", "Same", 200),
        entry("2015-01-01", "Same", -100),
    ];

    let output = tabula::format("USD", "en-US", &entries)?;
    let changes: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|line| line.rsplit(" | ").next().unwrap().trim())
        .collect();

    assert_eq!(changes, vec!["($1.00)", "($5.00)", "$2.00"]);
    Ok(())
}

#[test]
fn test_overlong_description_is_truncated() -> Result<()> {
    let entries = vec![entry("2015-01-21", "Freude schoner Gotterfunken", -123456)];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &["01/21/2015 | Freude schoner Gotterf... |   ($1,234.56)"]
        )
    );
    Ok(())
}

#[test]
fn test_euros() -> Result<()> {
    let entries = vec![entry("2015-01-01", "Buy present", -1000)];

    assert_eq!(
        tabula::format("EUR", "en-US", &entries)?,
        table(
            US_HEADER,
            &["01/01/2015 | Buy present               |      (€10.00)"]
        )
    );
    Ok(())
}

#[test]
fn test_dutch_locale() -> Result<()> {
    let entries = vec![entry("2015-03-12", "Buy present", 123456)];

    assert_eq!(
        tabula::format("USD", "nl-NL", &entries)?,
        table(
            NL_HEADER,
            &["12-03-2015 | Buy present               |   $ 1.234,56 "]
        )
    );
    Ok(())
}

#[test]
fn test_dutch_negative_number() -> Result<()> {
    let entries = vec![entry("2015-03-12", "Buy present", -12345)];

    assert_eq!(
        tabula::format("USD", "nl-NL", &entries)?,
        table(
            NL_HEADER,
            &["12-03-2015 | Buy present               |     $ -123,45"]
        )
    );
    Ok(())
}

#[test]
fn test_dutch_euro_negative_uses_day_first() -> Result<()> {
    let entries = vec![entry("2015-01-21", "Refund", -1000)];

    assert_eq!(
        tabula::format("EUR", "nl-NL", &entries)?,
        table(
            NL_HEADER,
            &["21-01-2015 | Refund                    |      € -10,00"]
        )
    );
    Ok(())
}

#[test]
fn test_american_negative_number_with_3_digits_before_decimal_point() -> Result<()> {
    let entries = vec![entry("2015-03-12", "Buy present", -12345)];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &["03/12/2015 | Buy present               |     ($123.45)"]
        )
    );
    Ok(())
}

#[test]
fn test_invalid_currency() {
    assert_eq!(
        tabula::format("XYZ", "en-US", &[]),
        Err(ConfigurationError::InvalidCurrency)
    );
    assert_eq!(
        tabula::format("XYZ", "en-US", &[]).unwrap_err().to_string(),
        "Invalid currency"
    );
}

#[test]
fn test_invalid_locale_reported_before_currency() {
    let err = tabula::format("USD", "fr-FR", &[]).unwrap_err();
    assert_eq!(err, ConfigurationError::InvalidLocale);
    assert_eq!(err.to_string(), "Invalid locale");

    assert_eq!(
        tabula::format("XYZ", "fr-FR", &[]),
        Err(ConfigurationError::InvalidLocale)
    );
}

#[test]
fn test_invalid_date_fails_at_construction() {
    let err = create_entry("2015-02-31", "Nope", 100).unwrap_err();
    assert!(err.to_string().contains("2015-02-31"));
}

#[test]
fn test_output_has_no_trailing_newline() -> Result<()> {
    let entries = vec![entry("2015-01-01", "One", 1), entry("2015-01-02", "Two", 2)];
    let output = tabula::format("EUR", "nl-NL", &entries)?;

    assert!(!output.ends_with('\n'));
    assert_eq!(output.lines().count(), 3);
    Ok(())
}

#[test]
fn test_same_day_descriptions_ignore_case() -> Result<()> {
    let entries = vec![
        entry("2015-01-01", "apple", 100),
        entry("2015-01-01", "Bob", 100),
    ];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &[
                "01/01/2015 | apple                     |        $1.00 ",
                "01/01/2015 | Bob                       |        $1.00 ",
            ]
        )
    );
    Ok(())
}

#[test]
fn test_at_sign_in_description_orders_by_whole_key() -> Result<()> {
    let entries = vec![
        entry("2015-01-01", "a", 500),
        entry("2015-01-01", "a@0", 100),
    ];

    assert_eq!(
        tabula::format("USD", "en-US", &entries)?,
        table(
            US_HEADER,
            &[
                "01/01/2015 | a@0                       |        $1.00 ",
                "01/01/2015 | a                         |        $5.00 ",
            ]
        )
    );
    Ok(())
}
