use std::fmt::{Debug, Display, Formatter};

quantity!(
    /// Installed capacity per unit of daily consumption.
    KilowattsPerKilowattHour, via: f64, suffix: "kW/kWh", precision: 2
);

quantity!(
    /// Installed system cost per kilowatt of capacity.
    RupeesPerKilowatt, via: f64
);

quantity!(
    /// Dimensionless fraction, within `(0.0, 1.0]` once validated as an assumption.
    Share, via: f64
);

impl Display for RupeesPerKilowatt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{}/kW", crate::fmt::Grouped(self.0))
    }
}

impl Debug for RupeesPerKilowatt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:?}/kW", self.0)
    }
}

impl Display for Share {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}

impl Debug for Share {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
