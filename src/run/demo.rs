use std::io::Write;

use color::{
    color::{GREEN, ORANGE, RED},
    Color, Contrast,
};

use super::{count_distinct, swatch};
use crate::error::SwatchError;

const DEMO_CONTRAST: f64 = 0.5;

/// Walks through rendering, equality, addition, hashing and contrast on a few fixed colors.
pub(crate) fn run<W: Write>(out: &mut W, values: bool) -> Result<(), SwatchError> {
    let red = RED;
    swatch(out, red, values)?;

    let green = GREEN;
    writeln!(out, "{}", red == green)?;
    writeln!(out, "{}", red == Color::new(255, 0, 0))?;

    swatch(out, red + green, values)?;

    // two separately built oranges collapse into one entry
    let palette = [ORANGE, red, green, Color::new(255, 165, 0)];
    writeln!(out, "{}", count_distinct(palette))?;

    let contrast = Contrast::new(DEMO_CONTRAST)?;
    swatch(out, contrast * red, values)
}
