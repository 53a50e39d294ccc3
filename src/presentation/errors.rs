// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::services::stock_search_service::SearchServiceError;
use crate::utils::errors::RepositoryError;

/// 应用错误类型
///
/// JSON 接口的统一错误出口，根据底层错误选择状态码
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        let repo_status = |err: &RepositoryError| match err {
            RepositoryError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RepositoryError::QueryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let Some(err) = self.0.downcast_ref::<SearchServiceError>() {
            return match err {
                SearchServiceError::Input(_) => StatusCode::BAD_REQUEST,
                SearchServiceError::Repository(e) => repo_status(e),
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(err) => repo_status(err),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!(error = %error_message, "Request failed");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
