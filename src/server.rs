//! HTTP surface serving the render pipeline
//!
//! Trivial glue by design: parse the request, hand the composed document to
//! the pipeline, wrap the bytes into a base64 data URL. CORS mirrors what a
//! public preview widget needs (any origin, preflight answered early).

use crate::sign::document::{self, DocumentOptions};
use crate::sign::{style, Alignment, PlexiglassStyle, Sign};
use crate::{async_api, ImageFormat, RenderOptions};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::Engine as Base64Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Format the HTTP layer uses unless the request asks for another one.
const DEFAULT_HTTP_FORMAT: ImageFormat = ImageFormat::Webp;
const DEFAULT_HTTP_QUALITY: u32 = 90;

/// Shared server state: the base render options every request starts from
#[derive(Debug, Clone)]
pub struct AppState {
    pub base: RenderOptions,
}

impl AppState {
    pub fn new(base: RenderOptions) -> Self {
        Self { base }
    }
}

/// Body of `POST /api/generate-product-image`
///
/// `text`, `fontId` and `color` are required; everything else falls back to
/// the documented defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub text: Option<String>,
    pub font_id: Option<String>,
    pub color: Option<String>,
    pub plexiglass_style: Option<PlexiglassStyle>,
    pub alignment: Option<Alignment>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<ImageFormat>,
    pub quality: Option<u32>,
}

/// Successful render payload: the image as a base64 data URL
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub image: String,
    pub mime_type: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-product-image", post(generate))
        .route("/api/health", get(health))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

async fn health() -> Response {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

async fn generate(State(state): State<AppState>, Json(request): Json<GenerateRequest>) -> Response {
    let non_empty = |field: Option<String>| field.filter(|value| !value.is_empty());

    let (text, font_id, color) = match (
        non_empty(request.text),
        non_empty(request.font_id),
        non_empty(request.color),
    ) {
        (Some(text), Some(font_id), Some(color)) => (text, font_id, color),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Missing required fields",
                    "required": ["text", "fontId", "color"],
                })),
            )
                .into_response()
        }
    };

    let sign = Sign {
        text,
        font_id,
        color,
        plexiglass: request.plexiglass_style.unwrap_or_default(),
        alignment: request.alignment.unwrap_or_default(),
    };

    let mut options = state.base.clone();
    options.width = request.width.unwrap_or(options.width);
    options.height = request.height.unwrap_or(options.height);
    options.format = request.format.unwrap_or(DEFAULT_HTTP_FORMAT);
    options.quality = request.quality.unwrap_or(DEFAULT_HTTP_QUALITY);

    let css = style::stylesheet(&sign, options.width, options.height);
    let html = document::compose_with_stylesheets(
        &sign.fragment(),
        &[css],
        &DocumentOptions {
            width: options.width,
            height: options.height,
            background: options.background.clone(),
        },
    );

    tracing::info!(
        font = sign.font_family(),
        width = options.width,
        height = options.height,
        "rendering sign preview"
    );

    match async_api::render_document(options, html).await {
        Ok(image) => {
            let encoded = base64::engine::general_purpose::STANDARD.encode(&image.bytes);
            let body = GenerateResponse {
                success: true,
                image: format!("data:{};base64,{}", image.mime_type, encoded),
                mime_type: image.mime_type.to_string(),
            };

            let mut response = Json(body).into_response();
            response.headers_mut().insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            );
            response
        }
        Err(e) => {
            tracing::error!("rendering failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to render image",
                    "message": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

// Preflight requests are answered before they reach the method router; all
// other responses get the headers appended on the way out.
async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, X-Requested-With"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );
}
