//! Color input parsing
//!
//! Accepted text forms: `#RRGGBB`, `0xRRGGBB`, bare `RRGGBB` and a JSON object
//! with either `r`/`g`/`b` or `red`/`green`/`blue` keys.

use core::fmt;

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::color::Rgb;
use crate::error::ColorError;

const HEX_DIGITS: usize = 6;

/// Which key names a channel object used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySet {
    /// `r`, `g`, `b`
    Short,
    /// `red`, `green`, `blue`
    Long,
    /// Mixed or unknown keys
    Mixed,
}

/// Structured color with raw, not yet validated channel values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelObject {
    keys: KeySet,
    channels: [Option<f64>; 3],
}

impl ChannelObject {
    /// Object written with `r`, `g`, `b` keys
    pub const fn short(r: f64, g: f64, b: f64) -> Self {
        Self {
            keys: KeySet::Short,
            channels: [Some(r), Some(g), Some(b)],
        }
    }

    /// Object written with `red`, `green`, `blue` keys
    pub const fn long(red: f64, green: f64, blue: f64) -> Self {
        Self {
            keys: KeySet::Long,
            channels: [Some(red), Some(green), Some(blue)],
        }
    }

    pub const fn keys(&self) -> KeySet {
        self.keys
    }

    /// Validate the channels and build the color
    pub fn to_color(&self) -> Result<Rgb, ColorError> {
        if self.keys == KeySet::Mixed {
            return Err(ColorError::Keys);
        }
        let [r, g, b] = self.channels;
        Ok(Rgb {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
        })
    }
}

/// Color as handed over by the request layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue<'a> {
    /// Any of the accepted text forms
    Text(&'a str),
    /// Already structured channel object
    Channels(ChannelObject),
}

impl ColorValue<'_> {
    pub fn to_color(&self) -> Result<Rgb, ColorError> {
        match self {
            Self::Text(text) => text_to_color(text),
            Self::Channels(object) => object.to_color(),
        }
    }
}

/// Convert color text to RGB
pub fn text_to_color(input: &str) -> Result<Rgb, ColorError> {
    let input = input.trim();

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        return parse_hex(hex);
    }
    if input.len() == HEX_DIGITS && input.bytes().all(|b| b.is_ascii_hexdigit()) {
        return parse_hex(input);
    }
    if input.starts_with('{') {
        let (object, _) =
            serde_json_core::from_str::<ChannelObject>(input).map_err(|_| ColorError::Json)?;
        return object.to_color();
    }

    Err(ColorError::Format)
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    if hex.len() != HEX_DIGITS {
        return Err(ColorError::HexLength);
    }
    // from_str_radix alone would accept a leading sign
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::HexDigits);
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| ColorError::HexDigits)?;
    Ok(super::rgb_from_u32(value))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: Option<f64>) -> Result<u8, ColorError> {
    let value = value.ok_or(ColorError::Channel)?;
    if !value.is_finite() || libm::trunc(value) != value || !(0.0..=255.0).contains(&value) {
        return Err(ColorError::Channel);
    }
    Ok(value as u8)
}

impl<'de> Deserialize<'de> for ChannelObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ChannelObjectVisitor)
    }
}

struct ChannelObjectVisitor;

impl<'de> Visitor<'de> for ChannelObjectVisitor {
    type Value = ChannelObject;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with color channels")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut short = false;
        let mut long = false;
        let mut unknown = false;
        let mut channels = [None; 3];

        while let Some(key) = map.next_key::<&'de str>()? {
            let index = match key {
                "r" | "red" => 0,
                "g" | "green" => 1,
                "b" | "blue" => 2,
                _ => {
                    unknown = true;
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };
            if key.len() == 1 {
                short = true;
            } else {
                long = true;
            }
            channels[index] = Some(map.next_value::<f64>()?);
        }

        let keys = match (short, long, unknown) {
            (_, _, true) | (true, true, _) => KeySet::Mixed,
            (true, false, false) => KeySet::Short,
            // An empty object counts as the long form with every channel missing
            (false, _, false) => KeySet::Long,
        };
        Ok(ChannelObject { keys, channels })
    }
}
