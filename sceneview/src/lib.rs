use std::{future::Future, time::Duration};

use axum::extract::Request;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, info_span};

use crate::catalog::Catalog;
use crate::config::Config;

mod catalog;
pub mod config;
mod error;
mod result;
mod route;
pub mod shutdown;
mod title;

pub mod log;

#[cfg(feature = "webui")]
#[derive(rust_embed::RustEmbed)]
#[folder = "../assets/webui/"]
struct Assets;

pub async fn serve<F>(cfg: Config, listener: TcpListener, signal: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server listening on {}", listener.local_addr().unwrap());

    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_millis(500))
        .timeout(Duration::from_millis(3000))
        .build()
        .unwrap();

    let app_state = AppState {
        catalog: Catalog::new(cfg.data.clone()),
        config: cfg.clone(),
        client,
    };

    #[allow(unused_mut)]
    let mut app = Router::new()
        .merge(route::route())
        .layer(if cfg.http.cors {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        })
        .with_state(app_state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                info_span!(
                    "http_request",
                    uri = ?request.uri(),
                    method = ?request.method(),
                )
            }),
        );

    #[cfg(feature = "webui")]
    {
        app = app.fallback(static_handler);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .unwrap_or_else(|e| error!("Application error: {e}"));
}

#[cfg(feature = "webui")]
async fn static_handler(uri: http::Uri) -> axum::response::Response {
    use axum::response::IntoResponse;
    use http::{header, StatusCode};

    let mut path = uri.path().trim_start_matches('/');
    if path.is_empty() {
        path = "index.html";
    }
    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

#[derive(Clone)]
struct AppState {
    config: Config,
    catalog: Catalog,
    client: reqwest::Client,
}
