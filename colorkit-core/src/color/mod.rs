//! Color types and conversions for the RGB, HEX, HSL and CMYK encodings.

pub mod convert;
pub mod model;

pub use convert::{
    cmyk_to_hex, cmyk_to_hsl, cmyk_to_rgb, hex_to_cmyk, hex_to_hsl, hex_to_rgb, hsl_to_cmyk,
    hsl_to_hex, hsl_to_rgb, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
};
pub use model::{
    CmykColor, ColorValue, Encoding, HexColor, HslColor, RgbColor, HEX_LEN, HUE_MAX, PERCENT_MAX,
};
