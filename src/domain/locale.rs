use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a format call names a locale or currency pairing that has no
/// profile. The two lookups fail independently with fixed messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid locale")]
    InvalidLocale,

    #[error("Invalid currency")]
    InvalidCurrency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(ConfigurationError::InvalidCurrency),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnUs,
    NlNl,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::NlNl => "nl-NL",
        }
    }

    /// Table header line, column widths matching the rendered rows.
    pub fn header(&self) -> &'static str {
        match self {
            Locale::EnUs => "Date       | Description               | Change       ",
            Locale::NlNl => "Datum      | Omschrijving              | Verandering  ",
        }
    }

    pub fn group_separator(&self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::NlNl => '.',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::NlNl => ',',
        }
    }

    pub fn date_separator(&self) -> char {
        match self {
            Locale::EnUs => '/',
            Locale::NlNl => '-',
        }
    }

    /// Whether positive amounts put a space between symbol and number ("€ 1,00").
    pub fn symbol_spaced(&self) -> bool {
        matches!(self, Locale::NlNl)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Locale::EnUs),
            "nl-NL" => Ok(Locale::NlNl),
            _ => Err(ConfigurationError::InvalidLocale),
        }
    }
}

/// Layout of a negative currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativePattern {
    /// `($n)`
    Parenthesized,
    /// `$ -n`
    SymbolSpaceMinus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// MM/dd/yyyy
    MonthDayYear,
    /// dd/MM/yyyy
    DayMonthYear,
}

/// Formatting rules for one (currency, locale) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleProfile {
    pub currency: Currency,
    pub locale: Locale,
    pub negative_pattern: NegativePattern,
    pub date_order: DateOrder,
}

const PROFILES: [LocaleProfile; 4] = [
    LocaleProfile {
        currency: Currency::Usd,
        locale: Locale::EnUs,
        negative_pattern: NegativePattern::Parenthesized,
        date_order: DateOrder::MonthDayYear,
    },
    LocaleProfile {
        currency: Currency::Eur,
        locale: Locale::NlNl,
        negative_pattern: NegativePattern::SymbolSpaceMinus,
        date_order: DateOrder::DayMonthYear,
    },
    LocaleProfile {
        currency: Currency::Eur,
        locale: Locale::EnUs,
        negative_pattern: NegativePattern::Parenthesized,
        date_order: DateOrder::MonthDayYear,
    },
    LocaleProfile {
        currency: Currency::Usd,
        locale: Locale::NlNl,
        negative_pattern: NegativePattern::SymbolSpaceMinus,
        date_order: DateOrder::DayMonthYear,
    },
];

impl LocaleProfile {
    /// Look up the profile for an exact (currency, locale) pair.
    /// Any pair outside the table is reported as an invalid currency,
    /// including pairs whose locale is the unknown part.
    pub fn resolve(currency: &str, locale: &str) -> Result<Self, ConfigurationError> {
        let currency: Currency = currency.parse()?;
        let locale: Locale = locale
            .parse()
            .map_err(|_| ConfigurationError::InvalidCurrency)?;

        PROFILES
            .iter()
            .find(|p| p.currency == currency && p.locale == locale)
            .copied()
            .ok_or(ConfigurationError::InvalidCurrency)
    }

    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }
}

/// Header line for a locale code.
pub fn header_for(locale: &str) -> Result<&'static str, ConfigurationError> {
    Ok(locale.parse::<Locale>()?.header())
}
