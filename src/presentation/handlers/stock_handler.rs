// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{rejection::QueryRejection, Extension, Json, Query},
    response::Html,
};
use std::sync::Arc;
use tracing::warn;

use crate::{
    application::dto::search_request::{SearchParamsDto, SearchResponseDto},
    domain::{
        repositories::stock_repository::StockRepository,
        search::query::SearchInputError,
        services::stock_search_service::{SearchServiceError, StockSearchService},
    },
    presentation::{errors::AppError, views},
};

/// 返回搜索表单页面
pub async fn search_form() -> Html<&'static str> {
    Html(views::SEARCH_FORM)
}

/// 处理表单提交
///
/// 始终返回 200 的确认页面；失败细节只写入服务端日志。
/// 查询参数按键值对读取，重复的参数取第一次出现的值。
///
/// # 参数
///
/// * `repo` - 股票记录仓库实例
/// * `query` - 原始查询参数
pub async fn process<R>(
    Extension(repo): Extension<Arc<R>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Html<String>
where
    R: StockRepository + 'static,
{
    let params = match query {
        Ok(Query(pairs)) => SearchParamsDto::from_pairs(pairs),
        Err(rejection) => {
            warn!(error = %rejection, "Malformed search query string");
            return Html(views::results_page(views::MSG_SEARCH_ERROR, &[]));
        }
    };

    let service = StockSearchService::new(repo);
    let result = service
        .search(params.search_query.as_deref(), params.search_type.as_deref())
        .await;

    let page = match result {
        Ok(outcome) if outcome.is_empty() => views::results_page(views::MSG_NO_RESULTS, &[]),
        Ok(outcome) => views::results_page(
            &views::search_complete_message(outcome.records.len()),
            &outcome.records,
        ),
        Err(SearchServiceError::Input(SearchInputError::MissingQuery)) => {
            views::results_page(views::MSG_MISSING_QUERY, &[])
        }
        Err(SearchServiceError::Input(SearchInputError::InvalidSearchMode(_))) => {
            views::results_page(views::MSG_INVALID_MODE, &[])
        }
        Err(SearchServiceError::Repository(_)) => {
            views::results_page(views::MSG_SEARCH_ERROR, &[])
        }
    };

    Html(page)
}

/// JSON 搜索接口
///
/// # 错误
///
/// - 参数校验失败返回 400
/// - 读取失败返回 500，存储不可用返回 503
pub async fn search_api<R>(
    Extension(repo): Extension<Arc<R>>,
    Query(params): Query<SearchParamsDto>,
) -> Result<Json<SearchResponseDto>, AppError>
where
    R: StockRepository + 'static,
{
    let service = StockSearchService::new(repo);
    let outcome = service
        .search(params.search_query.as_deref(), params.search_type.as_deref())
        .await?;

    Ok(Json(outcome.into()))
}
