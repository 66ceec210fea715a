use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use api::response::{VideoError, VideoSummary};
use scene::{genre, VideoData};

use crate::config::Data;
use crate::error::AppError;

/// Read-only view over the per-model data directories. Everything is
/// reconstructed from disk on each call; there is no caching.
#[derive(Clone)]
pub struct Catalog {
    data: Data,
}

impl Catalog {
    pub fn new(data: Data) -> Self {
        Self { data }
    }

    fn model_dir(&self, model: &str) -> crate::result::Result<PathBuf> {
        if !self.data.models.iter().any(|m| m == model) {
            return Err(AppError::invalid_model(format!(
                "invalid model {:?}, must be one of: {}",
                model,
                self.data.models.join(", ")
            )));
        }
        Ok(self.data.dir.join(model))
    }

    /// One summary entry per `.json` file in the model's directory,
    /// sorted by video id. Per-file problems degrade the entry instead of
    /// aborting the batch.
    pub async fn list_videos(&self, model: &str) -> crate::result::Result<Vec<VideoSummary>> {
        let dir = self.model_dir(model)?;
        if fs::metadata(&dir).await.is_err() {
            return Err(AppError::DataDirectoryNotFound(format!(
                "data directory not found for {}: {}",
                model,
                dir.display()
            )));
        }

        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|err| AppError::DirectoryUnreadable(err.to_string()))?;
        let mut videos = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => return Err(AppError::DirectoryUnreadable(err.to_string())),
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(video_id) = name.strip_suffix(".json") else {
                continue;
            };
            videos.push(summarize_file(video_id, &entry.path()).await);
        }

        videos.sort_by(|a, b| a.video_id.cmp(&b.video_id));
        debug!("loaded {} videos for {}", videos.len(), model);
        Ok(videos)
    }

    /// Full scene list for one video, accepting both the array and the
    /// legacy object file formats.
    pub async fn load_video(&self, video_id: &str, model: &str) -> crate::result::Result<VideoData> {
        let dir = self.model_dir(model)?;
        if video_id.contains(['/', '\\']) || video_id.contains("..") {
            return Err(AppError::not_found(format!("no data found for video id: {}", video_id)));
        }
        let path = dir.join(format!("{}.json", video_id));
        if fs::metadata(&path).await.is_err() {
            return Err(AppError::not_found(format!(
                "no data found for video id: {} in {}",
                video_id, model
            )));
        }
        let content = fs::read_to_string(&path).await?;
        let value: Value = serde_json::from_str(&content)?;
        Ok(VideoData::from_value(value)?)
    }
}

async fn summarize_file(video_id: &str, path: &Path) -> VideoSummary {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("failed to read {}: {}", path.display(), err);
            return VideoSummary::degraded(video_id, VideoError::FileReadFailed);
        }
    };
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            warn!("unexpected content in {}: {}", path.display(), err);
            return VideoSummary::degraded(video_id, VideoError::Unexpected(err.to_string()));
        }
    };
    let data: Value = match serde_json::from_str(&content) {
        Ok(data) => data,
        Err(err) => {
            warn!("failed to parse {}: {}", path.display(), err);
            return VideoSummary::degraded(video_id, VideoError::JsonParseFailed);
        }
    };
    match data {
        Value::Array(scenes) => VideoSummary {
            video_id: video_id.to_string(),
            scene_count: scenes.len(),
            genre: genre::resolve(&scenes),
            error: None,
        },
        // Recognized but degenerate shape, not an error.
        _ => VideoSummary {
            video_id: video_id.to_string(),
            scene_count: 0,
            genre: genre::UNKNOWN.to_string(),
            error: None,
        },
    }
}
