use std::{collections::HashSet, io::Write};

use color::Color;
use log::debug;

use crate::{cli::Command, error::SwatchError};

pub(crate) mod demo;

/// Writes the swatch of `color` on its own line, followed by its channels if `values` is set.
fn swatch<W: Write>(out: &mut W, color: Color, values: bool) -> Result<(), SwatchError> {
    if values {
        writeln!(
            out,
            "{color} ({}, {}, {})",
            color.red(),
            color.green(),
            color.blue()
        )?;
    } else {
        writeln!(out, "{color}")?;
    }
    Ok(())
}

fn count_distinct(colors: impl IntoIterator<Item = Color>) -> usize {
    colors.into_iter().collect::<HashSet<_>>().len()
}

/// Executes a single command, writing its output to `out`.
pub(crate) fn execute<W: Write>(
    command: Command,
    values: bool,
    out: &mut W,
) -> Result<(), SwatchError> {
    match command {
        Command::Demo => demo::run(out, values),
        Command::Show { colors } => colors
            .into_iter()
            .try_for_each(|color| swatch(out, color, values)),
        Command::Add { colors } => {
            debug!("adding {} colors", colors.len());
            swatch(out, colors.into_iter().sum(), values)
        }
        Command::Contrast { color, factor } => {
            debug!("scaling {color:?} by {factor}");
            swatch(out, color.scale(factor)?, values)
        }
        Command::Eq { first, second } => Ok(writeln!(out, "{}", first == second)?),
        Command::Distinct { colors } => Ok(writeln!(out, "{}", count_distinct(colors))?),
    }
}
