use std::fmt::{Debug, Display, Formatter, Write};

/// Thousands-grouped number with at most two fraction digits, trailing zeros dropped.
pub struct Grouped(pub f64);

impl Debug for Grouped {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Grouped {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            return Display::fmt(&self.0, f);
        }

        let value = (self.0 * 100.0).round() / 100.0;
        if value < 0.0 {
            f.write_char('-')?;
        }
        let value = value.abs();
        let integral = format!("{:.0}", value.trunc());
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = ((value - value.trunc()) * 100.0).round() as u8;

        for (i, digit) in integral.chars().enumerate() {
            if i != 0 && (integral.len() - i) % 3 == 0 {
                f.write_char(',')?;
            }
            f.write_char(digit)?;
        }
        match cents {
            0 => Ok(()),
            cents if cents % 10 == 0 => write!(f, ".{}", cents / 10),
            cents => write!(f, ".{cents:02}"),
        }
    }
}
