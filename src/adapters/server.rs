//! HTTP boundary: a single multipart upload endpoint wrapping the same
//! pipeline as the CLI. Decode faults stay inside the soft-failure
//! contract (200 + `{}`); only a missing upload or an internal fault
//! surfaces as an HTTP error.

use crate::adapters::decoder::JsonMatchDecoder;
use crate::core::pipeline::SummaryPipeline;
use crate::utils::error::{Result, SummaryError};
use axum::{
    extract::multipart::{Multipart, MultipartError},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::net::SocketAddr;
use tempfile::NamedTempFile;
use tracing::{error, info, warn};

/// Conventional field name the upstream bot uses for the upload part.
const REPLAY_FIELD: &str = "replay_file";
const REPLAY_EXTENSION: &str = ".replay";

pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { "replay summary service is running" }))
        .route("/parse-replay", post(parse_replay))
        .route("/health", get(|| async { "ok" }))
}

pub async fn serve(bind: &str) -> Result<()> {
    let addr: SocketAddr = bind
        .parse()
        .map_err(|err| SummaryError::ConfigError {
            field: "bind".to_string(),
            reason: format!("invalid bind address '{}': {}", bind, err),
        })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("replay summary endpoint at http://{addr}/parse-replay");

    axum::serve(listener, router())
        .await
        .map_err(|err| SummaryError::ServerError {
            message: format!("server loop failed: {}", err),
        })
}

async fn parse_replay(multipart: Multipart) -> Response {
    let upload = match find_replay_part(multipart).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            warn!("upload rejected: no replay file part");
            return (StatusCode::BAD_REQUEST, "No replay file uploaded.").into_response();
        }
        Err(err) => {
            warn!(%err, "upload rejected: malformed multipart body");
            return (StatusCode::BAD_REQUEST, "Expected multipart form-data.").into_response();
        }
    };

    // The upload lives only as long as the parse; the temp file is
    // removed on drop whatever the outcome.
    let temp = match NamedTempFile::new() {
        Ok(temp) => temp,
        Err(err) => {
            error!(%err, "failed to create temp file for upload");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    if let Err(err) = tokio::fs::write(temp.path(), &upload).await {
        error!(%err, "failed to persist upload");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let pipeline = SummaryPipeline::new(JsonMatchDecoder::new());
    let value = pipeline.run(temp.path()).await;

    Json(value).into_response()
}

/// Finds the uploaded record among the form parts: the conventional
/// field name wins, with a `.replay` filename as fallback for clients
/// that name the part differently.
async fn find_replay_part(
    mut multipart: Multipart,
) -> std::result::Result<Option<Vec<u8>>, MultipartError> {
    let mut fallback: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await? {
        let named_match = field.name() == Some(REPLAY_FIELD);
        let extension_match = field
            .file_name()
            .is_some_and(|name| name.to_ascii_lowercase().ends_with(REPLAY_EXTENSION));

        if named_match {
            return Ok(Some(field.bytes().await?.to_vec()));
        }
        if extension_match && fallback.is_none() {
            fallback = Some(field.bytes().await?.to_vec());
        }
    }

    Ok(fallback)
}
