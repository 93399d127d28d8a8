//! Money

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Storefront currency.
pub const CURRENCY: &Currency = rusty_money::iso::USD;

/// Money amount in the storefront's currency model.
pub type Amount = Money<'static, Currency>;

/// Errors converting between decimal amounts and money.
#[derive(Debug, Error, PartialEq)]
pub enum MoneyConversionError {
    /// The amount does not fit in the currency's minor units.
    #[error("amount {0} is out of range for {1}")]
    OutOfRange(Decimal, &'static str),
}

/// Convert a money amount to its decimal representation (e.g. `1050` cents → `10.50`).
pub fn to_decimal(money: &Amount) -> Decimal {
    Decimal::new(money.to_minor_units(), money.currency().exponent)
}

/// Convert a decimal amount to money, rounding half away from zero at the currency exponent.
///
/// # Errors
///
/// Returns [`MoneyConversionError::OutOfRange`] when the amount does not fit in `i64` minor units.
pub fn from_decimal(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Amount, MoneyConversionError> {
    let minor = amount
        .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .and_then(|scaled| scaled.to_i64())
        .ok_or(MoneyConversionError::OutOfRange(
            amount,
            currency.iso_alpha_code,
        ))?;

    Ok(Money::from_minor(minor, currency))
}

/// Shorthand for an amount in storefront currency from minor units.
pub fn minor(units: i64) -> Amount {
    Money::from_minor(units, CURRENCY)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn to_decimal_uses_currency_exponent() {
        assert_eq!(to_decimal(&minor(1050)), Decimal::new(1050, 2));
    }

    #[test]
    fn from_decimal_rounds_half_away_from_zero() -> TestResult {
        assert_eq!(from_decimal(Decimal::from_str("10.005")?, CURRENCY)?, minor(1001));
        assert_eq!(from_decimal(Decimal::from_str("6")?, CURRENCY)?, minor(600));

        Ok(())
    }

    #[test]
    fn from_decimal_out_of_range_errors() {
        let result = from_decimal(Decimal::MAX, CURRENCY);

        assert!(
            matches!(result, Err(MoneyConversionError::OutOfRange(_, "USD"))),
            "expected OutOfRange, got {result:?}"
        );
    }
}
