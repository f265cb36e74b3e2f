use axum::{
    extract::{DefaultBodyLimit, Json, Multipart},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use colorkit::{
    ColorError, ColorSampler, ColorSet, ColorValue, ConversionCoordinator, Encoding, Field,
    ImagePixelSampler, SampleError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

/// Largest accepted image upload for `/api/sample`.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Request payload for the conversion endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Encoding of `value`
    pub encoding: Encoding,
    /// Color text, e.g. "255,0,0", "#ff0000", "hsl(0, 100%, 50%)"
    pub value: String,
}

/// Request payload for the edit endpoint: the current state plus one keystroke
#[derive(Debug, Serialize, Deserialize)]
pub struct EditRequest {
    /// Encoding the user set last (defaults to rgb)
    #[serde(default)]
    pub authoritative: Encoding,
    /// Current color; it is re-derived from its authoritative member
    pub color: ColorSet,
    /// Field the text was typed into
    pub field: Field,
    /// Raw field text
    pub input: String,
}

/// Result of applying one edit
#[derive(Debug, Serialize, Deserialize)]
pub struct EditResponse {
    /// Whether the input passed validation
    pub accepted: bool,
    pub authoritative: Encoding,
    pub color: ColorSet,
    /// Why the input was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Application-specific error types for the API
#[derive(Debug, Error)]
pub enum AppError {
    /// Color values that fail parsing or range checks
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Image decoding and pixel sampling failures
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Malformed request bodies
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Color(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Sample(SampleError::Unsupported) => StatusCode::NOT_IMPLEMENTED,
            AppError::Sample(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, error = %self, "request failed");

        let error_response = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Build the application router with all routes configured
pub fn app() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/convert", post(convert_color))
        .route("/api/random", get(random_color))
        .route("/api/edit", post(edit_color))
        .route("/api/sample", post(sample_color))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "colorkit API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Convert one color into all four encodings
pub async fn convert_color(
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ColorSet>, AppError> {
    let value = ColorValue::parse(payload.encoding, &payload.value)?;
    Ok(Json(colorkit::convert(value)?))
}

/// A uniformly random color
pub async fn random_color() -> Json<ColorSet> {
    Json(colorkit::randomize())
}

/// Apply one field edit to the supplied state
pub async fn edit_color(Json(payload): Json<EditRequest>) -> Result<Json<EditResponse>, AppError> {
    let current = payload.color.value(payload.authoritative);
    let mut coordinator = ConversionCoordinator::from_value(current)?;

    let rejection = match coordinator.set_field(payload.field, &payload.input) {
        Ok(_) => None,
        Err(err) => Some(err.to_string()),
    };

    Ok(Json(EditResponse {
        accepted: rejection.is_none(),
        authoritative: coordinator.authoritative(),
        color: coordinator.into_colors(),
        rejection,
    }))
}

/// Sample one pixel of an uploaded PNG or JPEG
///
/// Multipart fields: `file` (required), `x` and `y` (default 0).
pub async fn sample_color(mut multipart: Multipart) -> Result<Json<ColorSet>, AppError> {
    let mut image_data = None;
    let mut x = 0;
    let mut y = 0;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart field: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {e}")))?;
                image_data = Some(bytes);
            }
            "x" | "y" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read {field_name}: {e}"))
                })?;
                let coordinate = text.trim().parse::<u32>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid {field_name} coordinate: {text:?}"))
                })?;
                if field_name == "x" {
                    x = coordinate;
                } else {
                    y = coordinate;
                }
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| AppError::BadRequest("No file provided in upload".to_string()))?;

    let mut sampler = ImagePixelSampler::from_bytes(&image_data)?.at(x, y);
    let sampled = sampler.sample()?;
    debug!(x, y, %sampled, "sampled uploaded image");

    let mut coordinator = ConversionCoordinator::new();
    Ok(Json(coordinator.apply_sample(&sampled)?.clone()))
}
