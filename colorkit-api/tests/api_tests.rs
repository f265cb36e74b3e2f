//! Unit and integration tests for colorkit-api

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use colorkit::{ColorSet, Encoding, Field, HslColor, RgbColor};
use colorkit_api::{app, ConvertRequest, EditRequest, EditResponse, ErrorResponse};
use http_body_util::BodyExt;
use serde_json::json;
use tower::util::ServiceExt;

const BOUNDARY: &str = "----colorkitFormBoundary7MA4YWxk";

/// 4x2 PNG: green on the left half, orange on the right.
fn swatch_png() -> Vec<u8> {
    use image::{ImageFormat, Rgba, RgbaImage};

    let image = RgbaImage::from_fn(4, 2, |x, _| {
        if x < 2 {
            Rgba([0, 128, 0, 255])
        } else {
            Rgba([255, 165, 0, 255])
        }
    });
    let mut bytes = std::io::Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png).unwrap();
    bytes.into_inner()
}

/// Helper function to create multipart form data for the sample endpoint
fn multipart_request(file: Option<&[u8]>, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = Vec::new();

    if let Some(file) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            b"Content-Disposition: form-data; name=\"file\"; filename=\"swatch.png\"\r\n",
        );
        body.extend_from_slice(b"Content-Type: image/png\r\n\r\n");
        body.extend_from_slice(file);
        body.extend_from_slice(b"\r\n");
    }

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .uri("/api/sample")
        .method("POST")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use axum::response::IntoResponse;
    use colorkit::{ColorError, SampleError};
    use colorkit_api::AppError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_convert_request_deserialization() {
        let request: ConvertRequest = serde_json::from_value(json!({
            "encoding": "hsl",
            "value": "120,100,50"
        }))
        .unwrap();

        assert_eq!(request.encoding, Encoding::Hsl);
        assert_eq!(request.value, "120,100,50");
    }

    #[test]
    fn test_edit_request_defaults_to_rgb() {
        let request: EditRequest = serde_json::from_value(json!({
            "color": ColorSet::default(),
            "field": "k",
            "input": "10"
        }))
        .unwrap();

        assert_eq!(request.authoritative, Encoding::Rgb);
        assert_eq!(request.field, Field::Key);
    }

    #[test]
    fn test_edit_response_omits_missing_rejection() {
        let response = EditResponse {
            accepted: true,
            authoritative: Encoding::Hex,
            color: ColorSet::default(),
            rejection: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["authoritative"], "hex");
        assert!(json.get("rejection").is_none());
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            error: "Test error message".to_string(),
        };

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["error"], "Test error message");
    }

    #[test]
    fn test_app_error_status_codes() {
        let color_error: AppError = ColorError::ParseError("bad".to_string()).into();
        assert_eq!(
            color_error.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let unsupported: AppError = SampleError::Unsupported.into();
        assert_eq!(
            unsupported.into_response().status(),
            StatusCode::NOT_IMPLEMENTED
        );

        let out_of_bounds: AppError = SampleError::OutOfBounds {
            x: 9,
            y: 0,
            width: 4,
            height: 2,
        }
        .into();
        assert_eq!(out_of_bounds.into_response().status(), StatusCode::BAD_REQUEST);

        let bad_request = AppError::BadRequest("missing".to_string());
        assert_eq!(bad_request.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_health_check_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "colorkit API");
        assert!(json["version"].is_string());
    }

    #[tokio::test]
    async fn test_convert_endpoint_success() {
        let response = app()
            .oneshot(json_request(
                "/api/convert",
                json!({"encoding": "hex", "value": "#336699"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let colors: ColorSet = body_json(response).await;
        assert_eq!(colors.rgb, RgbColor::new(51, 102, 153));
        assert_eq!(colors.hex.as_str(), "336699");
        assert_eq!(colors.hsl, HslColor::new(210, 50, 40).unwrap());
    }

    #[tokio::test]
    async fn test_convert_endpoint_expands_hex_shorthand() {
        let response = app()
            .oneshot(json_request(
                "/api/convert",
                json!({"encoding": "hex", "value": "#FA0"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let colors: ColorSet = body_json(response).await;
        assert_eq!(colors.hex.as_str(), "ffaa00");
        assert_eq!(colors.rgb, RgbColor::new(255, 170, 0));
    }

    #[tokio::test]
    async fn test_convert_endpoint_keeps_authoritative_value() {
        let response = app()
            .oneshot(json_request(
                "/api/convert",
                json!({"encoding": "cmyk", "value": "50,100,100,50"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = body_json(response).await;
        assert_eq!(json["cmyk"], json!({"c": 50, "m": 100, "y": 100, "k": 50}));
        assert_eq!(json["rgb"], json!({"r": 64, "g": 0, "b": 0}));
    }

    #[tokio::test]
    async fn test_convert_endpoint_out_of_range() {
        let response = app()
            .oneshot(json_request(
                "/api/convert",
                json!({"encoding": "rgb", "value": "256,0,0"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = body_json(response).await;
        assert!(error.error.contains("out of range"), "{}", error.error);
    }

    #[tokio::test]
    async fn test_convert_endpoint_unknown_encoding() {
        let response = app()
            .oneshot(json_request(
                "/api/convert",
                json!({"encoding": "lab", "value": "50,0,0"}),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_random_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/random")
                    .method("GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let colors: ColorSet = body_json(response).await;
        assert_eq!(colors, ColorSet::from_rgb(colors.rgb));
    }

    #[tokio::test]
    async fn test_edit_endpoint_accepts_keystroke() {
        let response = app()
            .oneshot(json_request(
                "/api/edit",
                json!({
                    "authoritative": "rgb",
                    "color": ColorSet::default(),
                    "field": "r",
                    "input": "25"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let edit: EditResponse = body_json(response).await;
        assert!(edit.accepted);
        assert_eq!(edit.rejection, None);
        assert_eq!(edit.authoritative, Encoding::Rgb);
        assert_eq!(edit.color, ColorSet::from_rgb(RgbColor::new(25, 0, 0)));
    }

    #[tokio::test]
    async fn test_edit_endpoint_rejects_keystroke() {
        let response = app()
            .oneshot(json_request(
                "/api/edit",
                json!({
                    "color": ColorSet::default(),
                    "field": "g",
                    "input": "999"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let edit: EditResponse = body_json(response).await;
        assert!(!edit.accepted);
        assert!(edit.rejection.is_some());
        assert_eq!(edit.authoritative, Encoding::Rgb);
        assert_eq!(edit.color, ColorSet::default());
    }

    #[tokio::test]
    async fn test_edit_endpoint_switches_encoding() {
        let response = app()
            .oneshot(json_request(
                "/api/edit",
                json!({
                    "color": ColorSet::default(),
                    "field": "l",
                    "input": "25"
                }),
            ))
            .await
            .unwrap();

        let edit: EditResponse = body_json(response).await;
        assert!(edit.accepted);
        assert_eq!(edit.authoritative, Encoding::Hsl);
        assert_eq!(edit.color.hsl, HslColor::new(0, 100, 25).unwrap());
        assert_eq!(edit.color.rgb, RgbColor::new(128, 0, 0));
    }

    #[tokio::test]
    async fn test_edit_endpoint_invalid_state() {
        let mut color = serde_json::to_value(ColorSet::default()).unwrap();
        color["hsl"]["h"] = json!(400);

        let response = app()
            .oneshot(json_request(
                "/api/edit",
                json!({
                    "authoritative": "hsl",
                    "color": color,
                    "field": "s",
                    "input": "10"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_sample_endpoint_success() {
        let png = swatch_png();
        let response = app()
            .oneshot(multipart_request(Some(&png), &[("x", "3"), ("y", "1")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let colors: ColorSet = body_json(response).await;
        assert_eq!(colors.hex.as_str(), "ffa500");
        assert_eq!(colors.hsl, HslColor::new(39, 100, 50).unwrap());
    }

    #[tokio::test]
    async fn test_sample_endpoint_defaults_to_origin() {
        let png = swatch_png();
        let response = app()
            .oneshot(multipart_request(Some(&png), &[]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let colors: ColorSet = body_json(response).await;
        assert_eq!(colors.rgb, RgbColor::new(0, 128, 0));
    }

    #[tokio::test]
    async fn test_sample_endpoint_no_file() {
        let response = app()
            .oneshot(multipart_request(None, &[("x", "1")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = body_json(response).await;
        assert!(error.error.contains("No file provided"));
    }

    #[tokio::test]
    async fn test_sample_endpoint_out_of_bounds() {
        let png = swatch_png();
        let response = app()
            .oneshot(multipart_request(Some(&png), &[("x", "4"), ("y", "0")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = body_json(response).await;
        assert!(error.error.contains("outside image of 4x2"));
    }

    #[tokio::test]
    async fn test_sample_endpoint_invalid_coordinate() {
        let png = swatch_png();
        let response = app()
            .oneshot(multipart_request(Some(&png), &[("x", "-1")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sample_endpoint_not_an_image() {
        let response = app()
            .oneshot(multipart_request(Some(b"definitely not a png"), &[]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
