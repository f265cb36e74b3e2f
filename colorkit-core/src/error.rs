use thiserror::Error;

use crate::validation::Field;

/// Rejection of raw text typed into a single field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input for {field}: {input:?}")]
    Syntax { field: Field, input: String },

    #[error("Value {value} out of range for {field} (max {max})")]
    OutOfRange { field: Field, value: u32, max: u16 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Channel {channel} out of range: {value} (max {max})")]
    ChannelOutOfRange {
        channel: &'static str,
        value: u16,
        max: u16,
    },

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;

/// Failures of the color-sampling collaborator.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("EyeDropper API not supported in this browser.")]
    Unsupported,

    #[error("Sample point ({x}, {y}) outside image of {width}x{height}")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Invalid preferences file: {0}")]
    Json(#[from] serde_json::Error),
}
