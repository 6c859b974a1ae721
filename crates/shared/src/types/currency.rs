//! ISO 4217 currency codes.
//!
//! Amounts themselves are always `rust_decimal::Decimal`; the currency only labels
//! which unit a report is expressed in.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the budget configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indonesian Rupiah
    #[default]
    Idr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Idr => "IDR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Sgd => "SGD",
            Self::Jpy => "JPY",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "IDR" => Ok(Self::Idr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[test]
    fn test_default_is_rupiah() {
        assert_eq!(Currency::default(), Currency::Idr);
    }

    #[rstest]
    #[case(Currency::Idr, "IDR")]
    #[case(Currency::Usd, "USD")]
    #[case(Currency::Eur, "EUR")]
    #[case(Currency::Sgd, "SGD")]
    #[case(Currency::Jpy, "JPY")]
    fn test_currency_display_and_parse(#[case] currency: Currency, #[case] code: &str) {
        assert_eq!(currency.to_string(), code);
        assert_eq!(Currency::from_str(code).unwrap(), currency);
        assert_eq!(
            Currency::from_str(&code.to_lowercase()).unwrap(),
            currency
        );
    }

    #[test]
    fn test_currency_from_str_rejects_unknown() {
        assert!(Currency::from_str("XXX").is_err());
        assert!(Currency::from_str("").is_err());
    }
}
