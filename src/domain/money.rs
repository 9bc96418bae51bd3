use rust_decimal::Decimal;

use super::{LocaleProfile, NegativePattern};

/// Amounts enter the system as integer cents (minor units).
/// For EUR/USD, 1 unit = 100 cents, so €50.00 = 5000 cents.
pub type Cents = i64;

/// Convert cents into major currency units without going through floats.
/// Example: 5000 -> 50.00, -1234 -> -12.34
pub fn to_major_units(cents: Cents) -> Decimal {
    Decimal::new(cents, 2)
}

/// Render an amount as currency following the profile's symbol, separators
/// and sign patterns. Example (en-US, USD): 1234.56 -> "$1,234.56",
/// -10 -> "($10.00)"; (nl-NL, EUR): -10 -> "€ -10,00".
pub fn format_currency(amount: Decimal, profile: &LocaleProfile) -> String {
    let number = format_number(amount.abs(), profile);
    let symbol = profile.symbol();

    if amount.is_sign_negative() && !amount.is_zero() {
        match profile.negative_pattern {
            NegativePattern::Parenthesized => format!("({}{})", symbol, number),
            NegativePattern::SymbolSpaceMinus => format!("{} -{}", symbol, number),
        }
    } else if profile.locale.symbol_spaced() {
        format!("{} {}", symbol, number)
    } else {
        format!("{}{}", symbol, number)
    }
}

/// Two decimals, thousands grouped with the locale separators.
fn format_number(abs: Decimal, profile: &LocaleProfile) -> String {
    let fixed = format!("{:.2}", abs.round_dp(2));
    let (units, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = units.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(profile.locale.group_separator());
        }
        grouped.push(*digit);
    }

    format!(
        "{}{}{}",
        grouped,
        profile.locale.decimal_separator(),
        fraction
    )
}
