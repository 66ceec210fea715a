use axum::extract::{Path, Query, State};
use axum::Json;

use api::request::ModelQuery;
use api::response::{CategoryGroup, Field, SceneDetail};
use scene::category::categorize_scene;
use scene::value::{display_value, is_empty_value};

use crate::error::AppError;
use crate::AppState;

pub async fn show(
    State(state): State<AppState>,
    Path((video_id, index)): Path<(String, usize)>,
    Query(req): Query<ModelQuery>,
) -> crate::result::Result<Json<SceneDetail>> {
    let data = state.catalog.load_video(&video_id, &req.model).await?;
    let total = data.scenes.len();
    let scene = data.scenes.get(index).ok_or_else(|| {
        AppError::not_found(format!(
            "scene {} out of range for {} ({} scenes)",
            index, video_id, total
        ))
    })?;

    let categories = categorize_scene(scene)
        .into_iter()
        .map(|(category, fields)| CategoryGroup {
            name: category.to_string(),
            fields: fields
                .into_iter()
                .map(|(name, value)| {
                    let empty = is_empty_value(&value);
                    Field {
                        display: display_value(&value),
                        name,
                        value,
                        empty,
                    }
                })
                .collect(),
        })
        .collect();

    Ok(Json(SceneDetail {
        start_seconds: scene.start_seconds(),
        video_id,
        index,
        total,
        categories,
    }))
}
