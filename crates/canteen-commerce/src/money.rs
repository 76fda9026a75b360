//! Money type for representing prices and totals.
//!
//! The canteen works in a single currency. Amounts are stored as an integer
//! count of paise to avoid floating-point drift when summing cart lines.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Glyph shown in front of every amount.
pub const CURRENCY_GLYPH: &str = "\u{20b9}";

/// Minor units per major unit.
const PAISE_PER_RUPEE: i64 = 100;

/// A non-negative monetary amount.
///
/// Serialized as a plain number in rupees (`80`, `49.5`), which is the shape
/// stored in remote menu documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Money {
    paise: i64,
}

impl Money {
    /// Zero.
    pub const ZERO: Money = Money { paise: 0 };

    /// Create from whole rupees. Negative input clamps to zero.
    pub const fn from_rupees(rupees: i64) -> Self {
        Self::from_paise(rupees.saturating_mul(PAISE_PER_RUPEE))
    }

    /// Create from paise. Negative input clamps to zero.
    pub const fn from_paise(paise: i64) -> Self {
        Self {
            paise: if paise < 0 { 0 } else { paise },
        }
    }

    /// Create from a decimal rupee amount.
    ///
    /// Returns `None` for negative, NaN or infinite input.
    ///
    /// ```
    /// use canteen_commerce::money::Money;
    /// let price = Money::from_decimal(49.99).unwrap();
    /// assert_eq!(price.paise(), 4999);
    /// ```
    pub fn from_decimal(rupees: f64) -> Option<Self> {
        if !rupees.is_finite() || rupees < 0.0 {
            return None;
        }
        let paise = (rupees * PAISE_PER_RUPEE as f64).round();
        if paise > i64::MAX as f64 {
            return None;
        }
        Some(Self {
            paise: paise as i64,
        })
    }

    /// Amount in paise.
    pub fn paise(&self) -> i64 {
        self.paise
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Whether the amount has no fractional rupee part.
    pub fn is_whole(&self) -> bool {
        self.paise % PAISE_PER_RUPEE == 0
    }

    /// Convert to a decimal rupee value.
    pub fn to_decimal(&self) -> f64 {
        self.paise as f64 / PAISE_PER_RUPEE as f64
    }

    /// Format as a display string (e.g., "₹80", "₹49.50").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_GLYPH, self.display_amount())
    }

    /// Format without the glyph (e.g., "80", "49.50").
    pub fn display_amount(&self) -> String {
        if self.is_whole() {
            format!("{}", self.paise / PAISE_PER_RUPEE)
        } else {
            format!(
                "{}.{:02}",
                self.paise / PAISE_PER_RUPEE,
                self.paise % PAISE_PER_RUPEE
            )
        }
    }

    /// Add, saturating at the maximum representable amount.
    pub fn saturating_add(self, other: Money) -> Money {
        Money {
            paise: self.paise.saturating_add(other.paise),
        }
    }

    /// Multiply by a quantity, saturating.
    pub fn saturating_mul(self, quantity: u32) -> Money {
        Money {
            paise: self.paise.saturating_mul(i64::from(quantity)),
        }
    }

    /// Sum an iterator of amounts.
    pub fn sum(iter: impl IntoIterator<Item = Money>) -> Money {
        iter.into_iter().fold(Money::ZERO, Money::saturating_add)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.saturating_mul(quantity)
    }
}

impl From<Money> for f64 {
    fn from(m: Money) -> f64 {
        m.to_decimal()
    }
}

impl TryFrom<f64> for Money {
    type Error = String;

    fn try_from(rupees: f64) -> Result<Self, Self::Error> {
        Money::from_decimal(rupees).ok_or_else(|| format!("invalid price: {}", rupees))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees() {
        let m = Money::from_rupees(80);
        assert_eq!(m.paise(), 8000);
        assert!(m.is_whole());
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).unwrap().paise(), 4999);
        assert_eq!(Money::from_decimal(0.0), Some(Money::ZERO));
        assert!(Money::from_decimal(-1.0).is_none());
        assert!(Money::from_decimal(f64::NAN).is_none());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_rupees(205).display(), "\u{20b9}205");
        assert_eq!(Money::from_paise(4950).display(), "\u{20b9}49.50");
        assert_eq!(Money::from_paise(5).display_amount(), "0.05");
    }

    #[test]
    fn test_money_arithmetic() {
        let total = Money::from_rupees(80) * 2 + Money::from_rupees(45);
        assert_eq!(total, Money::from_rupees(205));
        assert_eq!(
            Money::sum([Money::from_rupees(1), Money::from_rupees(2)]),
            Money::from_rupees(3)
        );
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Money::from_rupees(-5), Money::ZERO);
    }

    #[test]
    fn test_money_serde_as_number() {
        let m: Money = serde_json::from_str("80").unwrap();
        assert_eq!(m, Money::from_rupees(80));
        assert_eq!(serde_json::to_string(&Money::from_paise(4950)).unwrap(), "49.5");
        assert!(serde_json::from_str::<Money>("-3").is_err());
    }
}
