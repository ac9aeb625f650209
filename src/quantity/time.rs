quantity!(
    /// Whole years, as in a payback period.
    Years, via: u64, suffix: "years", precision: 0
);

/// 2⁶⁴, the first value that no longer fits.
const LIMIT: f64 = 18_446_744_073_709_551_616.0;

impl Years {
    /// Round a fractional number of years up.
    ///
    /// Returns [`None`] for negative, `NaN`, or unrepresentably large inputs.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_ceil(years: f64) -> Option<Self> {
        let years = years.ceil();
        (years >= 0.0 && years < LIMIT).then(|| Self(years as u64))
    }

    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }
}
