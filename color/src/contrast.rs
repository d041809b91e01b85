use core::ops::Mul;

use crate::{color::Color, error::ColorError};

/// A validated contrast factor in `[0, 1]`.
///
/// `0` pulls every channel towards the 128 midpoint, `1` leaves a color untouched.
/// The gain of the remap depends only on the factor, so it is computed once here and
/// shared by every channel the factor is applied to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contrast {
    factor: f64,
    gain: f64,
}

impl Contrast {
    pub const IDENTITY: Contrast = Contrast {
        factor: 1.0,
        gain: 1.0,
    };

    /// Validates `factor` and precomputes the channel gain.
    ///
    /// Fails for anything outside `[0, 1]`, including NaN.
    pub fn new(factor: f64) -> Result<Contrast, ColorError> {
        if !(0.0..=1.0).contains(&factor) {
            return Err(ColorError::ContrastOutOfRange(factor));
        }

        // contrast level in -256..=0 for the integer contrast formula
        let level = -256.0 * (1.0 - factor);
        let gain = (259.0 * (level + 255.0)) / (255.0 * (259.0 - level));

        Ok(Contrast { factor, gain })
    }

    pub fn value(&self) -> f64 {
        self.factor
    }

    pub fn gain(&self) -> f64 {
        self.gain
    }

    /// Remaps a single channel around the 128 midpoint.
    pub fn apply(&self, channel: u8) -> u8 {
        let adjusted = self.gain * (f64::from(channel) - 128.0) + 128.0;
        // gain stays within [-0.002, 1], so the result never drops below zero
        adjusted.min(255.0) as u8
    }
}

impl Default for Contrast {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<f64> for Contrast {
    type Error = ColorError;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Contrast::new(factor)
    }
}

impl Mul<Color> for Contrast {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs.map(|c| self.apply(c))
    }
}

impl Mul<Contrast> for Color {
    type Output = Color;

    fn mul(self, rhs: Contrast) -> Self::Output {
        rhs * self
    }
}
