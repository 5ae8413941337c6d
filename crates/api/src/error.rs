use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "detail": "<message>" }`; the HTTP status is
/// the only machine-readable classification.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that could not be read at all.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any store failure, tagged with what the handler was doing.
    #[error("Error {context}: {source}")]
    Unexpected {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id = %id, "Lookup miss");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unexpected { context, source } => {
                tracing::error!(context, error = %source, "Store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, axum::Json(json!({ "detail": message }))).into_response()
    }
}

/// Unparseable JSON, a missing JSON content type and missing or mistyped
/// fields are all validation failures; only a body that cannot be read
/// (size limit, broken stream) is a bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::Core(CoreError::Validation(err.body_text()))
            }
            JsonRejection::JsonSyntaxError(err) => {
                AppError::Core(CoreError::Validation(err.body_text()))
            }
            JsonRejection::MissingJsonContentType(err) => {
                AppError::Core(CoreError::Validation(err.body_text()))
            }
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Attach handler context to store results.
pub trait StoreResultExt<T> {
    /// Turn a [`StoreError`] into [`AppError::Unexpected`] described as
    /// `Error <context>: <cause>`.
    fn context(self, context: &'static str) -> AppResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, StoreError> {
    fn context(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::Unexpected { context, source })
    }
}
