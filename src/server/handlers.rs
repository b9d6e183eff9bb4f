use crate::core::aggregator::FileAggregator;
use crate::core::retriever;
use crate::domain::model::{FileListing, FileResult};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::utils::error::{MSG_DOWNLOAD_FAILED, MSG_LIST_FAILED};
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

pub async fn list_files(State(state): State<AppState>) -> Result<Json<FileListing>, ApiError> {
    let files = state.source.list_files().await.map_err(|e| {
        tracing::error!("Error fetching files from external API: {}", e);
        ApiError::Internal(MSG_LIST_FAILED)
    })?;

    Ok(Json(FileListing { files }))
}

pub async fn get_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FileResult>, ApiError> {
    match retriever::fetch_records(state.source.as_ref(), &name).await {
        Ok(lines) => Ok(Json(FileResult::success(name, lines))),
        Err(e) if e.is_not_found() => Err(ApiError::NotFound),
        Err(e) => {
            tracing::error!("Error fetching file {} from external API: {}", name, e);
            Err(ApiError::Internal(MSG_DOWNLOAD_FAILED))
        }
    }
}

pub async fn files_data(State(state): State<AppState>) -> Result<Json<Vec<FileResult>>, ApiError> {
    let aggregator = FileAggregator::new(state.source.clone(), state.concurrent_requests);

    let results = aggregator.aggregate_all().await.map_err(|e| {
        tracing::error!("Error fetching files from external API: {}", e);
        ApiError::Internal(MSG_LIST_FAILED)
    })?;

    Ok(Json(results))
}

pub async fn mocked_files(State(state): State<AppState>) -> Json<FileListing> {
    Json(FileListing {
        files: state.fixtures.file_names(),
    })
}

/// Raw CSV, the shape the remote service itself returns.
pub async fn mocked_file(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.fixtures.body_for(&name) {
        Some(body) => ([(header::CONTENT_TYPE, "text/csv")], body).into_response(),
        None => ApiError::NotFound.into_response(),
    }
}
