// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stock::StockRecord;
use crate::domain::repositories::stock_repository::StockRepository;
use crate::domain::search::query::StockQuery;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

/// 进程内股票记录仓库
///
/// 记录在构建时给定，之后只读。`set_failing(true)` 之后所有读取都返回
/// `QueryError`，用于模拟存储故障。
#[derive(Debug, Default)]
pub struct InMemoryStockRepository {
    records: Vec<StockRecord>,
    failing: AtomicBool,
}

impl InMemoryStockRepository {
    pub fn new(records: Vec<StockRecord>) -> Self {
        Self {
            records,
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn is_failing(&self) -> bool {
        self.failing.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn find_matching(&self, query: &StockQuery) -> Result<Vec<StockRecord>, RepositoryError> {
        if self.is_failing() {
            return Err(RepositoryError::QueryError(
                "in-memory store configured to fail".to_string(),
            ));
        }

        Ok(self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        if self.is_failing() {
            return Err(RepositoryError::StoreUnavailable(
                "in-memory store configured to fail".to_string(),
            ));
        }
        Ok(())
    }
}
