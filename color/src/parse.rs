use core::str::FromStr;

use crate::{color::Color, error::ParseColorError};

fn nibble(c: u8) -> Result<u8, ParseColorError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseColorError::InvalidHex),
    }
}

/// Parse the digits of a hex color, without the leading `#`.
///
/// The allowed formats are:
/// * RGB (each digit is repeated, `f` becomes `ff`)
/// * RRGGBB
fn parse_hex(hex: &str) -> Result<Color, ParseColorError> {
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Ok(Color::new(
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        )),
        6 => {
            let byte = |hi: u8, lo: u8| -> Result<u8, ParseColorError> {
                Ok((nibble(hi)? << 4) | nibble(lo)?)
            };

            Ok(Color::new(
                byte(bytes[0], bytes[1])?,
                byte(bytes[2], bytes[3])?,
                byte(bytes[4], bytes[5])?,
            ))
        }
        _ => Err(ParseColorError::InvalidLength),
    }
}

/// Parse a comma separated `r,g,b` triple of decimal channels.
fn parse_triple(s: &str) -> Result<Color, ParseColorError> {
    let mut channels = s.split(',').map(|c| {
        c.trim()
            .parse::<u8>()
            .map_err(|_| ParseColorError::InvalidChannel)
    });

    let red = channels.next().ok_or(ParseColorError::InvalidChannel)??;
    let green = channels.next().ok_or(ParseColorError::InvalidChannel)??;
    let blue = channels.next().ok_or(ParseColorError::InvalidChannel)??;

    if channels.next().is_some() {
        return Err(ParseColorError::InvalidChannel);
    }

    Ok(Color::new(red, green, blue))
}

pub fn parse_color(s: &str) -> Result<Color, ParseColorError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => parse_triple(s),
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}
