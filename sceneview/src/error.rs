use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;

use api::response::ErrorBody;

#[derive(Debug)]
pub enum AppError {
    InvalidModel(String),
    DataDirectoryNotFound(String),
    DirectoryUnreadable(String),
    NotFound(String),
    InternalServerError(anyhow::Error),
}

impl AppError {
    pub fn invalid_model<T>(t: T) -> Self
    where
        T: ToString,
    {
        AppError::InvalidModel(t.to_string())
    }

    pub fn not_found<T>(t: T) -> Self
    where
        T: ToString,
    {
        AppError::NotFound(t.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, details) = match self {
            AppError::InvalidModel(detail) => (StatusCode::BAD_REQUEST, "invalidModel", detail),
            AppError::DataDirectoryNotFound(detail) => {
                (StatusCode::NOT_FOUND, "dataDirectoryNotFound", detail)
            }
            AppError::DirectoryUnreadable(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "directoryUnreadable", detail)
            }
            AppError::NotFound(detail) => (StatusCode::NOT_FOUND, "notFound", detail),
            AppError::InternalServerError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internalServerError",
                err.to_string(),
            ),
        };
        (
            status,
            Json(ErrorBody {
                error: kind.to_string(),
                details: Some(details),
            }),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::InternalServerError(err.into())
    }
}
