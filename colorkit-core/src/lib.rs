//! # colorkit
//!
//! Color conversion between RGB, HEX, HSL and CMYK, with a coordinator that
//! keeps all four representations of one color in sync while the user edits
//! any of them.
//!
//! ## Features
//!
//! - **Conversions**: the twelve directed conversions between the four encodings,
//!   with RGB as the pivot
//! - **Synchronized state**: one authoritative encoding, the other three derived
//!   on every accepted edit, all four replaced together
//! - **Keystroke validation**: per-field syntax and range gates so half-typed
//!   values never leak into the other encodings
//! - **Eye-dropper sampling**: single-pixel sampling from PNG/JPEG images
//!   (`image` feature) and a copy-confirmation timer
//! - **Preferences**: theme and language flags stored as JSON (`serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use colorkit::{ColorValue, ConversionCoordinator, Field, HslColor, RgbColor, Result};
//!
//! # fn main() -> Result<()> {
//! let mut coordinator = ConversionCoordinator::new();
//! assert_eq!(coordinator.colors().hex.as_str(), "ff0000");
//!
//! // Setting HSL makes it authoritative and re-derives RGB, HEX and CMYK
//! let colors = coordinator.set_encoding(ColorValue::Hsl(HslColor::new(120, 100, 50)?))?;
//! assert_eq!(colors.rgb, RgbColor::new(0, 255, 0));
//!
//! // Raw field text is validated first; rejected text changes nothing
//! assert!(coordinator.set_field(Field::Red, "999").is_err());
//! coordinator.set_field(Field::Red, "25")?;
//! assert_eq!(coordinator.colors().rgb, RgbColor::new(25, 255, 0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`color`] - Color types and the conversion functions
//! - [`validation`] - Field-level input gates
//! - [`coordinator`] - The synchronized four-encoding state
//! - [`sampling`] - Eye-dropper contract, pixel sampler and picker session
//! - [`preferences`] - Theme and language flags

pub mod color;
pub mod coordinator;
pub mod error;
pub mod preferences;
pub mod sampling;
pub mod validation;

pub use color::{CmykColor, ColorValue, Encoding, HexColor, HslColor, RgbColor};
pub use coordinator::{convert, randomize, ColorSet, ConversionCoordinator, DEFAULT_SEED};
pub use error::{ColorError, PreferencesError, Result, SampleError, ValidationError};
pub use preferences::{Language, Preferences, Theme};
pub use sampling::{Clipboard, ColorSampler, PickerSession, UnsupportedSampler};
pub use validation::{Field, FieldInput};

#[cfg(feature = "image")]
pub use sampling::ImagePixelSampler;

/// Current version of colorkit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
