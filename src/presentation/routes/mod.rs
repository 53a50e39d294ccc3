// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::stock_repository::StockRepository;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::stock_handler;
use axum::{extract::Extension, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 仓库通过 `Extension<Arc<R>>` 注入
///
/// # 参数
///
/// * `repo` - 已就绪的股票记录仓库
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<R>(repo: Arc<R>) -> Router
where
    R: StockRepository + 'static,
{
    let form_routes = Router::new()
        .route("/", get(stock_handler::search_form))
        .route("/process", get(stock_handler::process::<R>));

    let api_routes = Router::new()
        .route("/health", get(health_check::<R>))
        .route("/v1/version", get(version))
        .route("/v1/stocks/search", get(stock_handler::search_api::<R>));

    Router::new()
        .merge(form_routes)
        .merge(api_routes)
        .layer(Extension(repo))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// 存储可用时返回"OK"，否则返回 503
pub async fn health_check<R>(Extension(repo): Extension<Arc<R>>) -> Result<&'static str, AppError>
where
    R: StockRepository + 'static,
{
    repo.ping().await?;
    Ok("OK")
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
