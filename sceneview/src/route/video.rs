use axum::extract::{Path, Query, State};
use axum::Json;

use api::request::ModelQuery;
use api::response::VideoList;
use scene::VideoData;

use crate::AppState;

pub async fn index(
    State(state): State<AppState>,
    Query(req): Query<ModelQuery>,
) -> crate::result::Result<Json<VideoList>> {
    let videos = state.catalog.list_videos(&req.model).await?;
    Ok(Json(VideoList {
        videos,
        model: req.model,
    }))
}

pub async fn show(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Query(req): Query<ModelQuery>,
) -> crate::result::Result<Json<VideoData>> {
    Ok(Json(state.catalog.load_video(&video_id, &req.model).await?))
}
