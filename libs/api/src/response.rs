use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoList {
    pub videos: Vec<VideoSummary>,
    pub model: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub video_id: String,
    pub scene_count: usize,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<VideoError>,
}

impl VideoSummary {
    /// Placeholder entry for a video whose file could not be processed.
    pub fn degraded(video_id: impl Into<String>, error: VideoError) -> Self {
        Self {
            video_id: video_id.into(),
            scene_count: 0,
            genre: "unknown".to_string(),
            error: Some(error),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum VideoError {
    FileReadFailed,
    JsonParseFailed,
    Unexpected(String),
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SceneDetail {
    pub video_id: String,
    pub index: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_seconds: Option<u64>,
    pub categories: Vec<CategoryGroup>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub value: Value,
    pub display: String,
    pub empty: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub video_id: String,
    pub title: String,
}
