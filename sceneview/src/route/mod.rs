use axum::routing::get;
use axum::Router;

use crate::AppState;

pub mod scene;
pub mod title;
pub mod video;

pub fn route() -> Router<AppState> {
    Router::new()
        .route("/api/videos", get(video::index))
        .route("/api/videos/:video_id", get(video::show))
        .route("/api/videos/:video_id/scenes/:index", get(scene::show))
        .route("/api/titles/:video_id", get(title::show))
}
