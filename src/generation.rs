use thiserror::Error;
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    models::{GenerationAcknowledgment, GenerationRequest, GenerationStatus},
};

pub const QUEUED_MESSAGE: &str =
    "Your AI dance remix has been queued. We will notify you once rendering is ready.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("videoId is required")]
    MissingVideoId,
    #[error("Video not found")]
    VideoNotFound(String),
}

/// Validates a submission against the catalog and returns a queued acknowledgment.
///
/// Nothing is enqueued or stored: the acknowledgment never leaves the `queued` state.
pub fn submit(catalog: &Catalog, request: GenerationRequest) -> Result<GenerationAcknowledgment, GenerationError> {
    let video_id = match request.video_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => return Err(GenerationError::MissingVideoId),
    };

    let video = catalog
        .get(video_id)
        .map_err(|_| GenerationError::VideoNotFound(video_id.to_string()))?;

    let ack = GenerationAcknowledgment {
        id: Uuid::new_v4(),
        status: GenerationStatus::Queued,
        video: *video,
        prompt: request.prompt,
        contact: request.contact,
        reference_image_name: request.reference_image_name,
        message: QUEUED_MESSAGE,
    };

    tracing::info!(generation_id = %ack.id, video_id = video.id, "🎬 Generation queued");
    Ok(ack)
}
