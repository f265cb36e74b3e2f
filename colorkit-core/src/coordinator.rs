//! Synchronized RGB/HEX/HSL/CMYK state.
//!
//! [`ConversionCoordinator`] holds the four representations of one color and
//! remembers which of them the user set last (the authoritative encoding).
//! Every accepted edit replaces the whole [`ColorSet`] at once: the edited
//! value is kept as given and the other three are derived from it.

use rand::Rng;
use tracing::debug;

use crate::color::{
    cmyk_to_hex, cmyk_to_hsl, cmyk_to_rgb, hex_to_cmyk, hex_to_hsl, hex_to_rgb, hsl_to_cmyk,
    hsl_to_hex, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl, CmykColor, ColorValue, Encoding,
    HexColor, HslColor, RgbColor,
};
use crate::error::Result;
use crate::validation::{self, Field, FieldInput};

/// Color the coordinator starts with.
pub const DEFAULT_SEED: RgbColor = RgbColor::RED;

/// One color in all four encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSet {
    pub rgb: RgbColor,
    pub hex: HexColor,
    pub hsl: HslColor,
    pub cmyk: CmykColor,
}

impl ColorSet {
    /// Builds the full set with `value` as the source of truth.
    pub fn derive(value: &ColorValue) -> Self {
        match value {
            ColorValue::Rgb(rgb) => Self::from_rgb(*rgb),
            ColorValue::Hex(hex) => Self {
                rgb: hex_to_rgb(hex.as_str()),
                hex: hex.clone(),
                hsl: hex_to_hsl(hex.as_str()),
                cmyk: hex_to_cmyk(hex.as_str()),
            },
            ColorValue::Hsl(hsl) => Self {
                rgb: hsl_to_rgb(*hsl),
                hex: hsl_to_hex(*hsl),
                hsl: *hsl,
                cmyk: hsl_to_cmyk(*hsl),
            },
            ColorValue::Cmyk(cmyk) => Self {
                rgb: cmyk_to_rgb(*cmyk),
                hex: cmyk_to_hex(*cmyk),
                hsl: cmyk_to_hsl(*cmyk),
                cmyk: *cmyk,
            },
        }
    }

    pub fn from_rgb(rgb: RgbColor) -> Self {
        Self {
            rgb,
            hex: rgb_to_hex(rgb),
            hsl: rgb_to_hsl(rgb),
            cmyk: rgb_to_cmyk(rgb),
        }
    }

    /// The member for `encoding`.
    pub fn value(&self, encoding: Encoding) -> ColorValue {
        match encoding {
            Encoding::Rgb => ColorValue::Rgb(self.rgb),
            Encoding::Hex => ColorValue::Hex(self.hex.clone()),
            Encoding::Hsl => ColorValue::Hsl(self.hsl),
            Encoding::Cmyk => ColorValue::Cmyk(self.cmyk),
        }
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::from_rgb(DEFAULT_SEED)
    }
}

/// Owner of the canonical color state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionCoordinator {
    colors: ColorSet,
    authoritative: Encoding,
}

impl Default for ConversionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionCoordinator {
    /// Starts from [`DEFAULT_SEED`] with RGB authoritative.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(rgb: RgbColor) -> Self {
        Self {
            colors: ColorSet::from_rgb(rgb),
            authoritative: Encoding::Rgb,
        }
    }

    /// Starts from any validated value, which becomes authoritative.
    pub fn from_value(value: ColorValue) -> Result<Self> {
        value.validate()?;
        Ok(Self {
            authoritative: value.encoding(),
            colors: ColorSet::derive(&value),
        })
    }

    pub fn colors(&self) -> &ColorSet {
        &self.colors
    }

    pub fn into_colors(self) -> ColorSet {
        self.colors
    }

    /// The encoding the user set last.
    pub fn authoritative(&self) -> Encoding {
        self.authoritative
    }

    /// Makes `value` authoritative and re-derives the other encodings.
    ///
    /// Out-of-range values are rejected and leave the state untouched.
    pub fn set_encoding(&mut self, value: ColorValue) -> Result<&ColorSet> {
        if let Err(err) = value.validate() {
            debug!(encoding = %value.encoding(), error = %err, "rejected color value");
            return Err(err);
        }
        Ok(self.commit(value))
    }

    /// Applies raw text typed into `field`.
    ///
    /// The text must pass [`validation::validate`]; the accepted channel is
    /// merged into the current value of the field's encoding.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<&ColorSet> {
        let input = match validation::validate(field, raw) {
            Ok(input) => input,
            Err(err) => {
                debug!(%field, raw, error = %err, "rejected field input");
                return Err(err.into());
            }
        };
        let value = self.merge(field, input);
        self.set_encoding(value)
    }

    /// Replaces the color with a uniformly random RGB triple.
    pub fn randomize(&mut self) -> &ColorSet {
        self.randomize_with(&mut rand::thread_rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ColorSet {
        let rgb = RgbColor::new(rng.gen(), rng.gen(), rng.gen());
        // u8 channels cannot fail validation
        self.commit(ColorValue::Rgb(rgb))
    }

    /// Integrates a `#rrggbb` string from the sampling collaborator as if it
    /// had been typed into the hex field.
    pub fn apply_sample(&mut self, sampled: &str) -> Result<&ColorSet> {
        let trimmed = sampled.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        self.set_field(Field::Hex, digits)
    }

    fn commit(&mut self, value: ColorValue) -> &ColorSet {
        let encoding = value.encoding();
        if self.colors.value(encoding) == value {
            return &self.colors;
        }

        self.colors = ColorSet::derive(&value);
        self.authoritative = encoding;
        debug!(
            %encoding,
            rgb = %self.colors.rgb,
            hex = %self.colors.hex,
            hsl = %self.colors.hsl,
            cmyk = %self.colors.cmyk,
            "committed color"
        );
        &self.colors
    }

    fn merge(&self, field: Field, input: FieldInput) -> ColorValue {
        let channel = match input {
            FieldInput::Hex(hex) => return ColorValue::Hex(hex),
            FieldInput::Channel(channel) => channel,
        };
        // validation bounded the channel by the field's maximum
        let narrow = channel as u8;
        let ColorSet { rgb, hsl, cmyk, .. } = self.colors.clone();

        match field {
            Field::Red => ColorValue::Rgb(RgbColor { r: narrow, ..rgb }),
            Field::Green => ColorValue::Rgb(RgbColor { g: narrow, ..rgb }),
            Field::Blue => ColorValue::Rgb(RgbColor { b: narrow, ..rgb }),
            Field::Hue => ColorValue::Hsl(HslColor { h: channel, ..hsl }),
            Field::Saturation => ColorValue::Hsl(HslColor { s: narrow, ..hsl }),
            Field::Lightness => ColorValue::Hsl(HslColor { l: narrow, ..hsl }),
            Field::Cyan => ColorValue::Cmyk(CmykColor { c: narrow, ..cmyk }),
            Field::Magenta => ColorValue::Cmyk(CmykColor { m: narrow, ..cmyk }),
            Field::Yellow => ColorValue::Cmyk(CmykColor { y: narrow, ..cmyk }),
            Field::Key => ColorValue::Cmyk(CmykColor { k: narrow, ..cmyk }),
            Field::Hex => ColorValue::Hex(self.colors.hex.clone()),
        }
    }
}

/// Derives all four encodings from a single value.
///
/// Unlike a keystroke in the hex field, a complete 3-digit hex value is
/// expanded to six digits.
pub fn convert(value: ColorValue) -> Result<ColorSet> {
    let value = match value {
        ColorValue::Hex(hex) => ColorValue::Hex(hex.expanded()),
        other => other,
    };
    ConversionCoordinator::from_value(value).map(ConversionCoordinator::into_colors)
}

/// A uniformly random color in all four encodings.
pub fn randomize() -> ColorSet {
    let mut coordinator = ConversionCoordinator::new();
    coordinator.randomize();
    coordinator.into_colors()
}
