use core::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use crate::{contrast::Contrast, error::ColorError};

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const ORANGE: Color = Color::new(255, 165, 0);

/// 8-bit RGB color.
///
/// Values never change after construction; combining or scaling a color yields a new one.
/// Equality and hashing cover the ordered `(red, green, blue)` triple.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    /// Builds a color from wide integers, rejecting any channel outside `0..=255`.
    pub fn try_new(red: i64, green: i64, blue: i64) -> Result<Color, ColorError> {
        let channel = |channel: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
        };

        Ok(Color {
            red: channel("red", red)?,
            green: channel("green", green)?,
            blue: channel("blue", blue)?,
        })
    }

    /// Per-channel saturating addition.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(self, other: Color) -> Color {
        self.zip(other, u8::saturating_add)
    }

    /// Applies a contrast adjustment, `factor` must be within `[0, 1]`.
    pub fn scale(self, factor: f64) -> Result<Color, ColorError> {
        Contrast::new(factor).map(|contrast| self * contrast)
    }

    pub(crate) fn map<F>(self, f: F) -> Color
    where
        F: Fn(u8) -> u8,
    {
        Color {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
        }
    }

    fn zip<F>(self, other: Color, f: F) -> Color
    where
        F: Fn(u8, u8) -> u8,
    {
        Color {
            red: f(self.red, other.red),
            green: f(self.green, other.green),
            blue: f(self.blue, other.blue),
        }
    }
}

impl Color {
    pub fn red(&self) -> u8 {
        self.red
    }
    pub fn green(&self) -> u8 {
        self.green
    }
    pub fn blue(&self) -> u8 {
        self.blue
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Color::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.red, color.green, color.blue]
    }
}

/// Renders a filled circle in the color using a 24-bit ANSI foreground sequence.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\x1b[38;2;{};{};{}m\u{25cf}\x1b[0m",
            self.red, self.green, self.blue
        )
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Self::Output {
        Color::add(self, rhs)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = Color::add(*self, rhs);
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Self {
        iter.fold(BLACK, Color::add)
    }
}

impl<'a> Sum<&'a Color> for Color {
    fn sum<I: Iterator<Item = &'a Color>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
