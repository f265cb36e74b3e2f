//! # colorkit-api
//!
//! REST API server for the colorkit library
//!

mod api;
pub use api::{
    app, convert_color, edit_color, health_check, random_color, sample_color, AppError,
    ConvertRequest, EditRequest, EditResponse, ErrorResponse, MAX_UPLOAD_BYTES,
};
