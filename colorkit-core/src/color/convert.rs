//! Conversions between RGB, HEX, HSL and CMYK.
//!
//! RGB is the pivot: every conversion that does not start or end in RGB is a
//! composition of two RGB conversions. All functions are total; malformed
//! hex text resolves to black.

use super::model::{CmykColor, HexColor, HslColor, RgbColor, HEX_LEN};

/// Formats each channel as two lowercase hex digits.
pub fn rgb_to_hex(rgb: RgbColor) -> HexColor {
    HexColor(format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
}

/// Parses 3 or 6 hex digits, with or without a leading `#`.
///
/// Any other input yields black. Callers that need to tell black from
/// garbage must validate the text first.
pub fn hex_to_rgb(hex: &str) -> RgbColor {
    parse_hex(hex).unwrap_or(RgbColor::BLACK)
}

fn parse_hex(hex: &str) -> Option<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            parse_hex(&expanded)
        }
        HEX_LEN => Some(RgbColor::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

pub fn rgb_to_hsl(rgb: RgbColor) -> HslColor {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if rgb.is_achromatic() {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    HslColor {
        h: (h * 360.0).round() as u16,
        s: percent(s),
        l: percent(l),
    }
}

/// Six 60° hue sectors; the last one is closed so that `h == 360` is red.
pub fn hsl_to_rgb(hsl: HslColor) -> RgbColor {
    let h = f64::from(hsl.h);
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match hsl.h {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    RgbColor::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Pure black (key rounding to 100%) maps to `{0, 0, 0, 100}`.
pub fn rgb_to_cmyk(rgb: RgbColor) -> CmykColor {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    let key = percent(k);
    if key == 100 {
        return CmykColor::BLACK;
    }

    let ink = |v: f64| percent((1.0 - v - k) / (1.0 - k));
    CmykColor {
        c: ink(r),
        m: ink(g),
        y: ink(b),
        k: key,
    }
}

pub fn cmyk_to_rgb(cmyk: CmykColor) -> RgbColor {
    let k = 1.0 - f64::from(cmyk.k) / 100.0;
    let ink = |v: u8| channel((1.0 - f64::from(v) / 100.0) * k);
    RgbColor::new(ink(cmyk.c), ink(cmyk.m), ink(cmyk.y))
}

pub fn hex_to_hsl(hex: &str) -> HslColor {
    rgb_to_hsl(hex_to_rgb(hex))
}

pub fn hex_to_cmyk(hex: &str) -> CmykColor {
    rgb_to_cmyk(hex_to_rgb(hex))
}

pub fn hsl_to_hex(hsl: HslColor) -> HexColor {
    rgb_to_hex(hsl_to_rgb(hsl))
}

pub fn hsl_to_cmyk(hsl: HslColor) -> CmykColor {
    rgb_to_cmyk(hsl_to_rgb(hsl))
}

pub fn cmyk_to_hex(cmyk: CmykColor) -> HexColor {
    rgb_to_hex(cmyk_to_rgb(cmyk))
}

pub fn cmyk_to_hsl(cmyk: CmykColor) -> HslColor {
    rgb_to_hsl(cmyk_to_rgb(cmyk))
}

/// Scales a unit fraction to a whole 0..=255 channel.
fn channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Scales a unit fraction to a whole percentage.
fn percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}
