use crate::quantity::{currency::Rupees, ratios::RupeesPerKilowatt};

quantity!(
    /// Nameplate capacity of a solar installation.
    Kilowatts, via: u32, suffix: "kW", precision: 0
);

implement_mul!(Kilowatts, RupeesPerKilowatt, Rupees);

impl Kilowatts {
    /// Round a fractional capacity up to whole kilowatts.
    ///
    /// Returns [`None`] for negative, `NaN`, or unrepresentably large inputs.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_ceil(kilowatts: f64) -> Option<Self> {
        let kilowatts = kilowatts.ceil();
        (kilowatts >= 0.0 && kilowatts <= f64::from(u32::MAX)).then(|| Self(kilowatts as u32))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_try_ceil() {
        assert_eq!(Kilowatts::try_ceil(2.5), Some(Kilowatts(3)));
        assert_eq!(Kilowatts::try_ceil(75.0), Some(Kilowatts(75)));
        assert_eq!(Kilowatts::try_ceil(f64::from(u32::MAX)), Some(Kilowatts(u32::MAX)));
    }

    #[test]
    fn test_try_ceil_out_of_range() {
        assert_eq!(Kilowatts::try_ceil(-1.0), None);
        assert_eq!(Kilowatts::try_ceil(f64::NAN), None);
        assert_eq!(Kilowatts::try_ceil(1e12), None);
    }

    #[test]
    fn test_cost() {
        let cost = Kilowatts(25) * RupeesPerKilowatt(100_000.0);
        assert_abs_diff_eq!(cost.0, 2_500_000.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilowatts(25).to_string(), "25 kW");
        assert_eq!(format!("{:?}", Kilowatts(25)), "25kW");
    }
}
