use axum::{
    body::Bytes,
    extract::{multipart::{MultipartError, MultipartRejection}, DefaultBodyLimit, Multipart, Path, State},
    http::{Method, StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    error::ApiError,
    generation,
    models::{GenerationRequest, GenerationResponse, VideoResponse, VideosResponse},
    renderer::{PageRenderer, RenderedPage},
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub renderer: Option<Arc<PageRenderer>>,
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Wrong-method requests on known paths take the same fallback as unknown paths.
        .route("/api/videos", get(list_videos).fallback(render_page))
        .route("/api/videos/:id", get(get_video).fallback(render_page))
        .route("/api/generations", post(create_generation).fallback(render_page))
        .route(
            "/generate/:video_id",
            get(render_page)
                .post(submit_generation_form)
                .fallback(render_page)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .fallback(render_page)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn list_videos(State(state): State<AppState>) -> Json<VideosResponse> {
    Json(VideosResponse { videos: state.catalog.list() })
}

pub async fn get_video(Path(id): Path<String>, State(state): State<AppState>) -> Result<Json<VideoResponse>, ApiError> {
    let video = state
        .catalog
        .get(&id)
        .map_err(|e| ApiError::NotFound(e.to_string()))?;
    Ok(Json(VideoResponse { video }))
}

// The body is parsed by hand so a missing content type or a bad payload still gets a JSON error.
pub async fn create_generation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<GenerationResponse>), ApiError> {
    let invalid = || ApiError::Validation("request body must be a JSON object".into());
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|_| invalid())?;
    if !value.is_object() {
        return Err(invalid());
    }
    let request: GenerationRequest = serde_json::from_value(value).map_err(|_| invalid())?;
    accept(&state, request)
}

/// Multipart variant posted by the generation page. The reference image is read off
/// the wire and dropped; only its file name is forwarded.
pub async fn submit_generation_form(
    State(state): State<AppState>,
    Path(path_video_id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<GenerationResponse>), ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::Validation(format!("invalid form data: {}", e.body_text())))?;
    let mut request = GenerationRequest::default();

    while let Some(mut field) = multipart.next_field().await.map_err(form_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if let Some(file_name) = field.file_name().map(str::to_string) {
            let mut discarded = 0usize;
            while let Some(chunk) = field.chunk().await.map_err(form_error)? {
                discarded += chunk.len();
            }
            debug!(field = %name, file_name = %file_name, discarded, "Discarded uploaded file");
            if name == "referenceImage" {
                request.reference_image_name = Some(file_name);
            }
            continue;
        }

        let value = field.text().await.map_err(form_error)?;
        match name.as_str() {
            "videoId" => request.video_id = Some(value),
            "prompt" => request.prompt = Some(value),
            "contact" => request.contact = Some(value),
            _ => {}
        }
    }

    if request.video_id.is_none() {
        request.video_id = Some(path_video_id);
    }
    accept(&state, request)
}

fn form_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(e.body_text())
    } else {
        ApiError::Validation(format!("invalid form data: {}", e.body_text()))
    }
}

fn accept(state: &AppState, request: GenerationRequest) -> Result<(StatusCode, Json<GenerationResponse>), ApiError> {
    let generation = generation::submit(&state.catalog, request)?;
    Ok((StatusCode::ACCEPTED, Json(GenerationResponse { generation })))
}

/// Everything that isn't API traffic belongs to the page renderer, GET only.
pub async fn render_page(State(state): State<AppState>, method: Method, uri: Uri) -> Result<RenderedPage, ApiError> {
    let renderer = match (&method, &state.renderer) {
        (&Method::GET, Some(renderer)) => renderer,
        _ => {
            info!("🚫 No route for {} {}", method, uri);
            return Err(ApiError::NotFound("Not found".into()));
        }
    };
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    Ok(renderer.render(path_and_query).await?)
}
