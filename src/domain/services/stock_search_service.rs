// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stock::StockRecord;
use crate::domain::repositories::stock_repository::StockRepository;
use crate::domain::search::query::{SearchInputError, StockQuery};
use crate::utils::errors::RepositoryError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchServiceError {
    #[error("Validation failed: {0}")]
    Input(#[from] SearchInputError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 一次搜索的结果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: StockQuery,
    pub records: Vec<StockRecord>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 股票搜索服务
///
/// 校验查询参数、读取仓库，并将结果写入服务端日志
pub struct StockSearchService<R> {
    repo: Arc<R>,
}

impl<R> StockSearchService<R>
where
    R: StockRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 执行搜索
    ///
    /// # 参数
    ///
    /// * `text` - 原始查询文本
    /// * `mode` - 原始搜索模式
    ///
    /// # 错误
    ///
    /// - 参数校验失败时返回 `Input`，此时不会访问仓库
    /// - 读取失败时返回 `Repository`
    pub async fn search(
        &self,
        text: Option<&str>,
        mode: Option<&str>,
    ) -> Result<SearchOutcome, SearchServiceError> {
        let query = StockQuery::parse(text, mode).inspect_err(|e| {
            warn!(error = %e, "Rejected search request");
        })?;

        let records = self.repo.find_matching(&query).await.inspect_err(|e| {
            error!(error = %e, query = %query, "Error during search");
        })?;

        if records.is_empty() {
            info!(query = %query, "No results found for search");
        } else {
            info!(query = %query, count = records.len(), "Search results");
            for record in &records {
                info!(
                    company = %record.company,
                    ticker = %record.ticker,
                    price = %record.display_price(),
                    "Search result"
                );
            }
        }

        Ok(SearchOutcome { query, records })
    }
}
