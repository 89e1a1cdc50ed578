use bigdecimal::BigDecimal;
use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("amount must not be negative")]
    Negative,
    #[error("amount does not fit in minor units")]
    Overflow,
    #[error("amount precision or exponent out of range")]
    OutOfRange,
}

/// Widest scale (either sign) accepted before normalization.
const MAX_SCALE: i64 = 18;
/// Bound on the unscaled integer; about 38 decimal digits.
const MAX_UNSCALED_BITS: u64 = 128;

/// Reject inputs whose normalization would expand into a huge integer.
fn check_range(raw: &BigDecimal) -> Result<(), MoneyError> {
    let (digits, scale) = raw.as_bigint_and_exponent();
    if digits.bits() > MAX_UNSCALED_BITS || !(-MAX_SCALE..=MAX_SCALE).contains(&scale) {
        return Err(MoneyError::OutOfRange);
    }
    Ok(())
}

/// Normalize a monetary value to 2 decimal places, rounding the dropped digits.
pub fn normalize_scale(value: &BigDecimal) -> BigDecimal {
    value.round(2).with_scale(2)
}

/// A non-negative amount held at two decimal places. Serializes as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "BigDecimal", into = "BigDecimal")]
pub struct NormalizedMoney(BigDecimal);

impl NormalizedMoney {
    pub fn new(raw: BigDecimal) -> Result<Self, MoneyError> {
        check_range(&raw)?;
        if raw < BigDecimal::from(0) {
            return Err(MoneyError::Negative);
        }
        let money = Self(normalize_scale(&raw));
        money.to_minor_units()?;
        Ok(money)
    }

    pub fn zero() -> Self {
        Self(normalize_scale(&BigDecimal::from(0)))
    }

    pub fn inner(&self) -> &BigDecimal {
        &self.0
    }

    /// Amount in the currency's minor unit (cents), as gateways expect.
    pub fn to_minor_units(&self) -> Result<i64, MoneyError> {
        (&self.0 * BigDecimal::from(100))
            .to_i64()
            .ok_or(MoneyError::Overflow)
    }
}

impl TryFrom<BigDecimal> for NormalizedMoney {
    type Error = MoneyError;
    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NormalizedMoney> for BigDecimal {
    fn from(value: NormalizedMoney) -> Self {
        value.0
    }
}

impl FromStr for NormalizedMoney {
    type Err = MoneyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = BigDecimal::from_str(s.trim()).map_err(|e| MoneyError::Invalid(e.to_string()))?;
        Self::new(raw)
    }
}

impl fmt::Display for NormalizedMoney {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let v = BigDecimal::parse_bytes(b"12.3456", 10).unwrap();
        assert_eq!(normalize_scale(&v).to_string(), "12.35");
        let whole = BigDecimal::from(10);
        assert_eq!(normalize_scale(&whole).to_string(), "10.00");
    }

    #[test]
    fn negative_rejected() {
        assert_eq!("-1.00".parse::<NormalizedMoney>(), Err(MoneyError::Negative));
    }

    #[test]
    fn minor_units() {
        let m: NormalizedMoney = "19.99".parse().unwrap();
        assert_eq!(m.to_minor_units().unwrap(), 1999);
        assert_eq!(NormalizedMoney::zero().to_minor_units().unwrap(), 0);
    }

    #[test]
    fn huge_exponents_are_out_of_range() {
        assert_eq!("1e1000000".parse::<NormalizedMoney>(), Err(MoneyError::OutOfRange));
        assert_eq!("1e-1000000".parse::<NormalizedMoney>(), Err(MoneyError::OutOfRange));
        let long = format!("1{}", "0".repeat(60));
        assert_eq!(long.parse::<NormalizedMoney>(), Err(MoneyError::OutOfRange));
    }

    #[test]
    fn amounts_past_minor_unit_range_overflow() {
        assert_eq!("1e17".parse::<NormalizedMoney>(), Err(MoneyError::Overflow));
        assert!("1e12".parse::<NormalizedMoney>().is_ok());
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!("ten".parse::<NormalizedMoney>(), Err(MoneyError::Invalid(_))));
    }
}
