use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "hip-hop")]
    HipHop,
    #[serde(rename = "latin")]
    Latin,
    #[serde(rename = "k-pop")]
    KPop,
    #[serde(rename = "urban")]
    Urban,
    #[serde(rename = "ballet")]
    Ballet,
}

/// A dance template in the catalog. Built once into a static table, never mutated.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DanceVideo {
    pub id: &'static str,
    pub title: &'static str,
    pub choreographer: &'static str,
    pub difficulty: Difficulty,
    pub duration: &'static str, // display only, e.g. "1:12"
    pub category: Category,
    pub description: &'static str,
    pub preview_url: &'static str,
    pub cover_image: &'static str,
    pub storage_object_key: &'static str,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub video_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub prompt: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reference_image_name: Option<String>,
}

// Non-string values (numbers, objects, null) decode as absent instead of failing the whole body.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Queued,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationAcknowledgment {
    pub id: Uuid,
    pub status: GenerationStatus,
    pub video: DanceVideo,
    pub prompt: Option<String>,
    pub contact: Option<String>,
    pub reference_image_name: Option<String>,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VideosResponse {
    pub videos: &'static [DanceVideo],
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub video: &'static DanceVideo,
}

#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub generation: GenerationAcknowledgment,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
