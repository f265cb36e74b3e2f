//! Keystroke validation for the editable color fields.
//!
//! Every field goes through a syntax gate first. Numeric fields then check
//! the parsed value against the channel's range; an empty numeric field reads
//! as 0. The hex field has no second gate: any 0 to 6 hex digits are accepted
//! as typed.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::color::{Encoding, HexColor, HUE_MAX, PERCENT_MAX};
use crate::error::{ColorError, ValidationError};

lazy_static! {
    static ref CHANNEL_DIGITS: Regex = Regex::new(r"^[0-9]{0,3}$").unwrap();
    static ref HEX_DIGITS: Regex = Regex::new(r"^[0-9A-Fa-f]{0,6}$").unwrap();
}

/// One editable input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    Red,
    #[cfg_attr(feature = "serde", serde(rename = "g"))]
    Green,
    #[cfg_attr(feature = "serde", serde(rename = "b"))]
    Blue,
    #[cfg_attr(feature = "serde", serde(rename = "hex"))]
    Hex,
    #[cfg_attr(feature = "serde", serde(rename = "h"))]
    Hue,
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    Saturation,
    #[cfg_attr(feature = "serde", serde(rename = "l"))]
    Lightness,
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    Cyan,
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Magenta,
    #[cfg_attr(feature = "serde", serde(rename = "y"))]
    Yellow,
    #[cfg_attr(feature = "serde", serde(rename = "k"))]
    Key,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Red,
        Field::Green,
        Field::Blue,
        Field::Hex,
        Field::Hue,
        Field::Saturation,
        Field::Lightness,
        Field::Cyan,
        Field::Magenta,
        Field::Yellow,
        Field::Key,
    ];

    /// The encoding this field edits.
    pub fn encoding(self) -> Encoding {
        match self {
            Field::Red | Field::Green | Field::Blue => Encoding::Rgb,
            Field::Hex => Encoding::Hex,
            Field::Hue | Field::Saturation | Field::Lightness => Encoding::Hsl,
            Field::Cyan | Field::Magenta | Field::Yellow | Field::Key => Encoding::Cmyk,
        }
    }

    /// Largest accepted value, `None` for the hex field.
    pub fn max(self) -> Option<u16> {
        match self {
            Field::Red | Field::Green | Field::Blue => Some(255),
            Field::Hex => None,
            Field::Hue => Some(HUE_MAX),
            _ => Some(PERCENT_MAX),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Red => "r",
            Field::Green => "g",
            Field::Blue => "b",
            Field::Hex => "hex",
            Field::Hue => "h",
            Field::Saturation => "s",
            Field::Lightness => "l",
            Field::Cyan => "c",
            Field::Magenta => "m",
            Field::Yellow => "y",
            Field::Key => "k",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Field::Red,
            "g" | "green" => Field::Green,
            "b" | "blue" => Field::Blue,
            "hex" => Field::Hex,
            "h" | "hue" => Field::Hue,
            "s" | "saturation" => Field::Saturation,
            "l" | "lightness" => Field::Lightness,
            "c" | "cyan" => Field::Cyan,
            "m" | "magenta" => Field::Magenta,
            "y" | "yellow" => Field::Yellow,
            "k" | "key" | "black" => Field::Key,
            other => return Err(ColorError::ParseError(format!("unknown field '{other}'"))),
        };
        Ok(field)
    }
}

/// A field value that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Channel(u16),
    Hex(HexColor),
}

/// Checks raw field text and returns the value it commits.
pub fn validate(field: Field, raw: &str) -> Result<FieldInput, ValidationError> {
    let syntax_error = || ValidationError::Syntax {
        field,
        input: raw.to_string(),
    };

    let Some(max) = field.max() else {
        if !HEX_DIGITS.is_match(raw) {
            return Err(syntax_error());
        }
        return Ok(FieldInput::Hex(HexColor(raw.to_ascii_lowercase())));
    };

    if !CHANNEL_DIGITS.is_match(raw) {
        return Err(syntax_error());
    }
    if raw.is_empty() {
        return Ok(FieldInput::Channel(0));
    }

    let value: u32 = raw.parse().map_err(|_| syntax_error())?;
    if value > u32::from(max) {
        return Err(ValidationError::OutOfRange { field, value, max });
    }
    Ok(FieldInput::Channel(value as u16))
}
