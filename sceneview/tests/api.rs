use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use tokio::net::TcpListener;

use api::response::{ErrorBody, SceneDetail, Title, VideoError, VideoList};
use scene::VideoData;
use sceneview::config::Config;

async fn shutdown_signal() {
    let _str = sceneview::shutdown::wait().await;
}

async fn serve_with_data(dir: &Path) -> SocketAddr {
    let mut cfg = Config::default();
    cfg.data.dir = dir.to_path_buf();
    // Dead port so title lookup always takes the fallback path.
    cfg.titles.endpoint = "http://127.0.0.1:1/oembed".to_string();

    let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
    let listener = TcpListener::bind(SocketAddr::new(ip, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(sceneview::serve(cfg, listener, shutdown_signal()));
    addr
}

#[tokio::test]
async fn test_invalid_model_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::videos("model9")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::BAD_REQUEST, res.status());
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!("invalidModel", body.error);
}

#[tokio::test]
async fn test_missing_data_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::videos("model1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::NOT_FOUND, res.status());
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!("dataDirectoryNotFound", body.error);
}

#[tokio::test]
async fn test_empty_directory_lists_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("model1")).unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::videos("model1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::OK, res.status());
    let body = res.json::<VideoList>().await.unwrap();
    assert_eq!("model1", body.model);
    assert!(body.videos.is_empty());
}

#[tokio::test]
async fn test_listing_degrades_per_file() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("model1");
    fs::create_dir(&dir).unwrap();

    // A directory with a .json suffix makes the read fail.
    fs::create_dir(dir.join("a.json")).unwrap();
    fs::write(
        dir.join("b.json"),
        r#"[{"scene_id":"s1","genre":"Drama"},{"scene_id":"s2","genre":"drama"}]"#,
    )
    .unwrap();
    fs::write(dir.join("c.json"), "not json at all").unwrap();
    fs::write(dir.join("d.json"), r#"{"scenes":[]}"#).unwrap();
    fs::write(dir.join("e.json"), [0xff, 0xfe, 0x80]).unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::videos("model1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::OK, res.status());
    let body = res.json::<VideoList>().await.unwrap();
    assert_eq!(5, body.videos.len());

    let ids: Vec<&str> = body.videos.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(vec!["a", "b", "c", "d", "e"], ids);

    assert_eq!(Some(VideoError::FileReadFailed), body.videos[0].error);
    assert_eq!(0, body.videos[0].scene_count);
    assert_eq!("unknown", body.videos[0].genre);

    assert_eq!(None, body.videos[1].error);
    assert_eq!(2, body.videos[1].scene_count);
    assert_eq!("drama", body.videos[1].genre);

    assert_eq!(Some(VideoError::JsonParseFailed), body.videos[2].error);

    // Object content is a recognized degenerate shape, not an error.
    assert_eq!(None, body.videos[3].error);
    assert_eq!(0, body.videos[3].scene_count);
    assert_eq!("unknown", body.videos[3].genre);

    // Non-UTF-8 content carries the failure message as a generic tag.
    assert!(matches!(
        body.videos[4].error,
        Some(VideoError::Unexpected(_))
    ));
    assert_eq!(0, body.videos[4].scene_count);
    assert_eq!("unknown", body.videos[4].genre);
}

#[tokio::test]
async fn test_listing_is_sorted_by_video_id() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("model2");
    fs::create_dir(&dir).unwrap();
    for id in ["zeta", "alpha", "mid"] {
        fs::write(dir.join(format!("{id}.json")), "[]").unwrap();
    }
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::videos("model2")))
        .await
        .unwrap();

    let body = res.json::<VideoList>().await.unwrap();
    let ids: Vec<&str> = body.videos.iter().map(|v| v.video_id.as_str()).collect();
    assert_eq!(vec!["alpha", "mid", "zeta"], ids);
}

#[tokio::test]
async fn test_get_video_array_format() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("model1");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("vid1.json"),
        r#"[{"scene_id":"s1","start_time":"0:10","genre":"Sport"}]"#,
    )
    .unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::video("vid1", "model1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::OK, res.status());
    let body = res.json::<VideoData>().await.unwrap();
    assert_eq!(1, body.scenes.len());
    assert_eq!("s1", body.scenes[0].scene_id);
    assert_eq!(Some("Sport".to_string()), body.scenes[0].genre);
}

#[tokio::test]
async fn test_get_video_legacy_format_preserves_extras() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("model1");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("old.json"),
        r#"{"scenes":[{"scene_id":"s1"}],"source":"batch-7"}"#,
    )
    .unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::video("old", "model1")))
        .await
        .unwrap();

    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(Some(&serde_json::json!("batch-7")), body.get("source"));
    assert_eq!(1, body["scenes"].as_array().unwrap().len());
}

#[tokio::test]
async fn test_get_video_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir(tmp.path().join("model1")).unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::video("nope", "model1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::NOT_FOUND, res.status());
    let body = res.json::<ErrorBody>().await.unwrap();
    assert_eq!("notFound", body.error);
}

#[tokio::test]
async fn test_scene_detail_is_categorized() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("model1");
    fs::create_dir(&dir).unwrap();
    fs::write(
        dir.join("vid1.json"),
        r#"[{
            "scene_id": "s1",
            "start_time": "1:02:03",
            "genre": "Drama",
            "labels": {"emotions": ["joy"]},
            "custom_field": "hello"
        }]"#,
    )
    .unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::scene("vid1", 0, "model1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::OK, res.status());
    let body = res.json::<SceneDetail>().await.unwrap();
    assert_eq!("vid1", body.video_id);
    assert_eq!(0, body.index);
    assert_eq!(1, body.total);
    assert_eq!(Some(3723), body.start_seconds);

    let names: Vec<&str> = body.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        vec![
            "Labels",
            "Location & Context",
            "Keywords & Sensitivity",
            "Ad Markers",
            "Description",
            "Metadata",
            "Other",
        ],
        names
    );

    let other = body.categories.last().unwrap();
    assert_eq!("custom_field", other.fields[0].name);
    assert_eq!("hello", other.fields[0].display);
    assert!(!other.fields[0].empty);

    let res = reqwest::get(format!("http://{addr}{}", api::path::scene("vid1", 5, "model1")))
        .await
        .unwrap();
    assert_eq!(http::StatusCode::NOT_FOUND, res.status());
}

#[tokio::test]
async fn test_title_lookup_falls_back() {
    let tmp = tempfile::tempdir().unwrap();
    let addr = serve_with_data(tmp.path()).await;

    let res = reqwest::get(format!("http://{addr}{}", api::path::title("vid1")))
        .await
        .unwrap();

    assert_eq!(http::StatusCode::OK, res.status());
    let body = res.json::<Title>().await.unwrap();
    assert_eq!("vid1", body.video_id);
    assert_eq!("Untitled Video", body.title);
}
