use bigdecimal::{BigDecimal, ParseBigDecimalError, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Default)]
/// An exact decimal amount of money.
///
/// `Money` wraps a [`BigDecimal`] so balances never pass through binary
/// floating point. The scale of each operand is kept: adding `100` to
/// `1000.0001` yields `1100.0001`, and that is also how it renders.
///
/// Rendering is always plain notation, never scientific. Equality and
/// ordering compare numeric value, so `3000` and `3000.00` are equal even
/// though they display differently; [`Money::is_identical`] also compares
/// scale.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let balance: Money = "1000.0001".parse().unwrap();
/// let credited = balance + Money::from(100);
/// assert_eq!(credited.to_string(), "1100.0001");
/// ```
pub struct Money(BigDecimal);

impl Money {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(BigDecimal::zero())
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Same value written with the same number of decimal places.
    pub fn is_identical(&self, other: &Money) -> bool {
        self.0.as_bigint_and_exponent() == other.0.as_bigint_and_exponent()
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Money(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for Money {
    fn from(value: BigDecimal) -> Self {
        Money(value)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        Ok(Money(bd))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Money> for &'a Money {
    type Output = Money;
    fn add(self, rhs: &'a Money) -> Money {
        Money(&self.0 + &rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl<'a> Sub<&'a Money> for &'a Money {
    type Output = Money;
    fn sub(self, rhs: &'a Money) -> Money {
        Money(&self.0 - &rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl SubAssign<&Money> for Money {
    fn sub_assign(&mut self, rhs: &Money) {
        *self = &*self - rhs;
    }
}

impl AddAssign<&Money> for Money {
    fn add_assign(&mut self, rhs: &Money) {
        *self = &*self + rhs;
    }
}
