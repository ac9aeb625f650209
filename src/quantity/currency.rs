use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::{fmt::Grouped, quantity::ratios::Share};

quantity!(
    /// Indian rupees.
    Rupees, via: f64
);

impl From<u32> for Rupees {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl Display for Rupees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{}", Grouped(self.0))
    }
}

impl Debug for Rupees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:?}", self.0)
    }
}

impl Mul<Share> for Rupees {
    type Output = Self;

    fn mul(self, rhs: Share) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Rupees {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div for Rupees {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
