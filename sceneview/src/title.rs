use serde::Deserialize;
use tracing::warn;

pub const FALLBACK_TITLE: &str = "Untitled Video";

#[derive(Deserialize)]
struct Oembed {
    title: Option<String>,
}

/// Display-title lookup via the configured oEmbed endpoint. Falls back to
/// a placeholder on any failure rather than blocking the rest of the view.
pub async fn fetch_video_title(client: &reqwest::Client, endpoint: &str, video_id: &str) -> String {
    match try_fetch(client, endpoint, video_id).await {
        Ok(Some(title)) => title,
        Ok(None) => FALLBACK_TITLE.to_string(),
        Err(err) => {
            warn!("failed to fetch title for video {}: {}", video_id, err);
            FALLBACK_TITLE.to_string()
        }
    }
}

async fn try_fetch(
    client: &reqwest::Client,
    endpoint: &str,
    video_id: &str,
) -> anyhow::Result<Option<String>> {
    let url = format!(
        "{}?url=https://www.youtube.com/watch?v={}&format=json",
        endpoint, video_id
    );
    let body: Oembed = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(body.title.filter(|title| !title.is_empty()))
}
