use axum::extract::{Path, State};
use axum::Json;

use api::response::Title;

use crate::title::fetch_video_title;
use crate::AppState;

pub async fn show(State(state): State<AppState>, Path(video_id): Path<String>) -> Json<Title> {
    let title =
        fetch_video_title(&state.client, &state.config.titles.endpoint, &video_id).await;
    Json(Title { video_id, title })
}
