//! Color value types for the four supported encodings.
//!
//! Channels are whole numbers: RGB in `0..=255`, hue in `0..=360`, and
//! saturation, lightness and the CMYK inks in `0..=100` percent.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

/// Upper bound of the hue channel in degrees.
pub const HUE_MAX: u16 = 360;

/// Upper bound of every percentage channel.
pub const PERCENT_MAX: u16 = 100;

/// Maximum number of digits in a hex color (without `#`).
pub const HEX_LEN: usize = 6;

/// The four color encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Encoding {
    #[default]
    Rgb,
    Hex,
    Hsl,
    Cmyk,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [Encoding::Rgb, Encoding::Hex, Encoding::Hsl, Encoding::Cmyk];

    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::Rgb => "rgb",
            Encoding::Hex => "hex",
            Encoding::Hsl => "hsl",
            Encoding::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Encoding::Rgb),
            "hex" => Ok(Encoding::Hex),
            "hsl" => Ok(Encoding::Hsl),
            "cmyk" => Ok(Encoding::Cmyk),
            other => Err(ColorError::ParseError(format!("unknown encoding '{other}'"))),
        }
    }
}

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const RED: RgbColor = RgbColor::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether all three channels are equal (no hue).
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    /// Accepts `255,0,0` or `rgb(255, 0, 0)`.
    fn from_str(s: &str) -> Result<Self> {
        let [r, g, b] = parse_channels::<3>(s, "rgb")?;
        let channel = |name, value: u16| {
            u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
                channel: name,
                value,
                max: 255,
            })
        };
        Ok(Self::new(channel("r", r)?, channel("g", g)?, channel("b", b)?))
    }
}

/// HSL color: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslColor {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl HslColor {
    /// Creates an HSL color, rejecting channels outside their ranges.
    pub fn new(h: u16, s: u8, l: u8) -> Result<Self> {
        let color = Self { h, s, l };
        color.validate()?;
        Ok(color)
    }

    pub fn validate(&self) -> Result<()> {
        check_channel("h", self.h, HUE_MAX)?;
        check_channel("s", self.s.into(), PERCENT_MAX)?;
        check_channel("l", self.l.into(), PERCENT_MAX)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for HslColor {
    type Err = ColorError;

    /// Accepts `120,100,50` or `hsl(120, 100%, 50%)`.
    fn from_str(s: &str) -> Result<Self> {
        let [h, s, l] = parse_channels::<3>(s, "hsl")?;
        Self::new(h, percent("s", s)?, percent("l", l)?)
    }
}

/// CMYK color with each ink in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CmykColor {
    pub c: u8,
    pub m: u8,
    pub y: u8,
    pub k: u8,
}

impl CmykColor {
    pub const BLACK: CmykColor = CmykColor {
        c: 0,
        m: 0,
        y: 0,
        k: 100,
    };

    /// Creates a CMYK color, rejecting inks above 100%.
    pub fn new(c: u8, m: u8, y: u8, k: u8) -> Result<Self> {
        let color = Self { c, m, y, k };
        color.validate()?;
        Ok(color)
    }

    pub fn validate(&self) -> Result<()> {
        check_channel("c", self.c.into(), PERCENT_MAX)?;
        check_channel("m", self.m.into(), PERCENT_MAX)?;
        check_channel("y", self.y.into(), PERCENT_MAX)?;
        check_channel("k", self.k.into(), PERCENT_MAX)
    }
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.c, self.m, self.y, self.k
        )
    }
}

impl FromStr for CmykColor {
    type Err = ColorError;

    /// Accepts `0,100,100,0` or `cmyk(0%, 100%, 100%, 0%)`.
    fn from_str(s: &str) -> Result<Self> {
        let [c, m, y, k] = parse_channels::<4>(s, "cmyk")?;
        Self::new(
            percent("c", c)?,
            percent("m", m)?,
            percent("y", y)?,
            percent("k", k)?,
        )
    }
}

/// Hex color text: up to six lowercase hex digits, no leading `#`.
///
/// Values derived from RGB always hold six digits. A value typed by the user
/// may be shorter while it is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct HexColor(pub(crate) String);

impl HexColor {
    /// Validates and lowercases `text`; one leading `#` is ignored.
    pub fn new(text: &str) -> Result<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() > HEX_LEN || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::ParseError(format!("invalid hex color '{text}'")));
        }
        Ok(Self(digits.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value holds all six digits.
    pub fn is_complete(&self) -> bool {
        self.0.len() == HEX_LEN
    }

    /// Expands 3-digit shorthand to six digits; other lengths are kept.
    pub fn expanded(&self) -> HexColor {
        if self.0.len() == 3 {
            HexColor(self.0.chars().flat_map(|c| [c, c]).collect())
        } else {
            self.clone()
        }
    }

    /// CSS form with a leading `#`.
    pub fn to_css(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// A color in exactly one encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "encoding", content = "value", rename_all = "lowercase")
)]
pub enum ColorValue {
    Rgb(RgbColor),
    Hex(HexColor),
    Hsl(HslColor),
    Cmyk(CmykColor),
}

impl ColorValue {
    pub fn encoding(&self) -> Encoding {
        match self {
            ColorValue::Rgb(_) => Encoding::Rgb,
            ColorValue::Hex(_) => Encoding::Hex,
            ColorValue::Hsl(_) => Encoding::Hsl,
            ColorValue::Cmyk(_) => Encoding::Cmyk,
        }
    }

    /// Parses `text` in the textual form of `encoding`.
    pub fn parse(encoding: Encoding, text: &str) -> Result<Self> {
        Ok(match encoding {
            Encoding::Rgb => ColorValue::Rgb(text.parse()?),
            Encoding::Hex => ColorValue::Hex(text.parse()?),
            Encoding::Hsl => ColorValue::Hsl(text.parse()?),
            Encoding::Cmyk => ColorValue::Cmyk(text.parse()?),
        })
    }

    /// Checks every channel against its range.
    pub fn validate(&self) -> Result<()> {
        match self {
            // u8 channels and the HexColor constructor already bound these
            ColorValue::Rgb(_) | ColorValue::Hex(_) => Ok(()),
            ColorValue::Hsl(hsl) => hsl.validate(),
            ColorValue::Cmyk(cmyk) => cmyk.validate(),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(rgb) => rgb.fmt(f),
            ColorValue::Hex(hex) => write!(f, "#{hex}"),
            ColorValue::Hsl(hsl) => hsl.fmt(f),
            ColorValue::Cmyk(cmyk) => cmyk.fmt(f),
        }
    }
}

fn check_channel(channel: &'static str, value: u16, max: u16) -> Result<()> {
    if value > max {
        return Err(ColorError::ChannelOutOfRange {
            channel,
            value,
            max,
        });
    }
    Ok(())
}

fn percent(channel: &'static str, value: u16) -> Result<u8> {
    check_channel(channel, value, PERCENT_MAX)?;
    // bounded by PERCENT_MAX above
    Ok(value as u8)
}

/// Splits `N` comma separated channels, with an optional `name(...)` wrapper
/// and optional `%` suffixes.
fn parse_channels<const N: usize>(s: &str, name: &str) -> Result<[u16; N]> {
    let trimmed = s.trim();
    let inner = match trimmed.get(..name.len() + 1) {
        Some(head) if head.eq_ignore_ascii_case(&format!("{name}(")) => trimmed
            [name.len() + 1..]
            .strip_suffix(')')
            .ok_or_else(|| ColorError::ParseError(format!("missing ')' in '{s}'")))?,
        _ => trimmed,
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(ColorError::ParseError(format!(
            "expected {N} channels for {name}, got {}",
            parts.len()
        )));
    }

    let mut channels = [0u16; N];
    for (slot, part) in channels.iter_mut().zip(parts) {
        let digits = part.strip_suffix('%').unwrap_or(part).trim();
        *slot = digits
            .parse()
            .map_err(|_| ColorError::ParseError(format!("invalid channel '{part}' in '{s}'")))?;
    }
    Ok(channels)
}
