//! String encoding of colors.
//!
//! Accepted inputs:
//! - `r,g,b` and `r,g,b,a` with integer channels `0..=255` (whitespace around
//!   components is ignored, alpha defaults to 255)
//! - `#rrggbb` and `#rrggbbaa`
//!
//! Colors are always written back as `r,g,b,a`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;
use crate::paint::Color;

/// Converts between color strings and [`Color`] values.
///
/// Hosts with their own color notation implement this and hand it to the
/// expression functions; [`ChannelCodec`] is the built-in implementation.
pub trait ColorCodec: Send + Sync {
    /// Returns `None` when `text` is not a color.
    fn decode_color(&self, text: &str) -> Option<Color>;

    fn encode_color(&self, color: Color) -> String;
}

/// The comma-separated channel notation, with hex input accepted as well.
#[derive(Debug, Copy, Clone, Default)]
pub struct ChannelCodec;

impl ColorCodec for ChannelCodec {
    fn decode_color(&self, text: &str) -> Option<Color> {
        match text.parse() {
            Ok(color) => Some(color),
            Err(e) => {
                log::trace!("not a color {text:?}: {e}");
                None
            }
        }
    }

    fn encode_color(&self, color: Color) -> String {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => parse_channels(s),
        }
    }
}

fn parse_channels(s: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::ComponentCount(parts.len()));
    }
    let mut channels = [255u8; 4];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = parse_component(part)?;
    }
    let [r, g, b, a] = channels;
    Ok(Color::new(r, g, b, a))
}

fn parse_component(part: &str) -> Result<u8, ColorParseError> {
    let part = part.trim();
    // `u8::from_str` would also take a leading `+`.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorParseError::InvalidComponent(part.to_string()));
    }
    part.parse()
        .map_err(|_| ColorParseError::InvalidComponent(part.to_string()))
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidComponent(format!("#{hex}")));
    }
    if hex.len() != 6 && hex.len() != 8 {
        return Err(ColorParseError::HexLength(hex.len()));
    }
    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorParseError::InvalidComponent(format!("#{hex}")))
    };
    let a = if hex.len() == 8 { byte(6)? } else { 255 };
    Ok(Color::new(byte(0)?, byte(2)?, byte(4)?, a))
}
