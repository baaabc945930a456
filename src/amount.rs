use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

use crate::sales::Quantity;

/// Represents an amount of money: a unit price, or a running sales total.
///
/// The amount is stored internally as a floating-point number, but the
/// [`Display`] implementation formats it to 2 decimal places.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Amount(f64);

impl Amount {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<Quantity> for Amount {
    type Output = Self;

    fn mul(self, rhs: Quantity) -> Self::Output {
        Self(self.0 * rhs.as_f64())
    }
}
