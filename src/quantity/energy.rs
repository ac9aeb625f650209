use crate::quantity::{power::Kilowatts, ratios::KilowattsPerKilowattHour};

quantity!(
    /// Average daily electricity consumption.
    KilowattHours, via: u32, suffix: "kWh", precision: 0
);

impl KilowattHours {
    /// Nameplate capacity that covers this daily usage, rounded up to a whole kilowatt.
    ///
    /// [`None`] when the capacity does not fit into [`Kilowatts`].
    pub fn required_capacity(self, sizing_factor: KilowattsPerKilowattHour) -> Option<Kilowatts> {
        Kilowatts::try_ceil(f64::from(self.0) * sizing_factor.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_capacity_rounds_up() {
        let factor = KilowattsPerKilowattHour(0.25);
        assert_eq!(KilowattHours(10).required_capacity(factor), Some(Kilowatts(3)));
        assert_eq!(KilowattHours(100).required_capacity(factor), Some(Kilowatts(25)));
        assert_eq!(KilowattHours(101).required_capacity(factor), Some(Kilowatts(26)));
    }

    #[test]
    fn test_required_capacity_overflow() {
        let factor = KilowattsPerKilowattHour(1e10);
        assert_eq!(KilowattHours(100).required_capacity(factor), None);
    }
}
