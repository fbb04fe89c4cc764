use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use indexmap::IndexMap;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::error::InvalidInput;

/// Number of decimal places in a currency amount.
pub const CURRENCY_SCALE: u32 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_cents(cents: i64) -> Self {
        Self::new(cents, CURRENCY_SCALE)
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts a wire amount, rounding to the currency scale.
    ///
    /// Returns `None` for NaN, infinities, and values outside the decimal range.
    pub fn from_f64(value: f64) -> Option<Self> {
        Decimal::from_f64(value).map(|decimal| Self(decimal).round_to_cents())
    }

    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Rounds half away from zero to two decimals (`12.345 -> 12.35`).
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Sum that stops with `None` instead of overflowing.
    pub fn checked_sum(values: impl IntoIterator<Item = Self>) -> Option<Self> {
        values
            .into_iter()
            .try_fold(Self::ZERO, |acc, value| acc.checked_add(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents().0;
        write!(f, "{rounded:.2}")
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Rule selecting the share formula applied to every participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SplitPolicy {
    #[default]
    Equal,
    Percentage,
    Solo,
}

impl SplitPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitPolicy::Equal => "equal",
            SplitPolicy::Percentage => "percentage",
            SplitPolicy::Solo => "solo",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitPolicy {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(SplitPolicy::Equal),
            "percentage" => Ok(SplitPolicy::Percentage),
            "solo" => Ok(SplitPolicy::Solo),
            other => Err(InvalidInput::UnknownPolicy(other.to_owned())),
        }
    }
}

/// A single itemized expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub description: String,
    pub amount: Money,
}

impl Item {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// Total of an item list, rounded to the currency scale. `None` when the total overflows.
pub fn sum_items(items: &[Item]) -> Option<Money> {
    Money::checked_sum(items.iter().map(|item| item.amount)).map(Money::round_to_cents)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub paid: Money,
    /// Weight in `[0, 100]`, read only under [`SplitPolicy::Percentage`].
    pub percentage: Option<Decimal>,
    /// Read only under [`SplitPolicy::Solo`].
    pub is_payer: Option<bool>,
}

impl Participant {
    pub fn new(name: impl Into<String>, paid: Money) -> Self {
        Self {
            name: name.into(),
            paid,
            percentage: None,
            is_payer: None,
        }
    }

    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = Some(percentage);
        self
    }

    pub fn with_payer(mut self, is_payer: bool) -> Self {
        self.is_payer = Some(is_payer);
        self
    }
}

/// Paid amount, computed share, and the resulting signed balance.
///
/// Positive balance: creditor. Negative: debtor. Zero: settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantBalance {
    pub name: String,
    pub paid: Money,
    pub share: Money,
    pub balance: Money,
}

impl ParticipantBalance {
    pub fn new(name: impl Into<String>, paid: Money, share: Money) -> Self {
        Self {
            name: name.into(),
            paid,
            share,
            balance: (paid - share).round_to_cents(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentInstruction {
    pub to: String,
    pub amount: Money,
}

/// Debtor name to the payments that debtor owes, in debtor supply order.
pub type PaymentsByDebtor = IndexMap<String, Vec<PaymentInstruction>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitResult {
    pub name: String,
    pub paid: Money,
    pub share: Money,
    pub balance: Money,
    pub payments: Vec<PaymentInstruction>,
}

impl SplitResult {
    pub fn from_balance(balance: ParticipantBalance, payments: Vec<PaymentInstruction>) -> Self {
        Self {
            name: balance.name,
            paid: balance.paid,
            share: balance.share,
            balance: balance.balance,
            payments,
        }
    }
}
