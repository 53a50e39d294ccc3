// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stock::StockRecord;
use crate::domain::repositories::stock_repository::StockRepository;
use crate::domain::search::query::StockQuery;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};
use tracing::debug;

/// 基于 MongoDB 的股票记录仓库
///
/// 集合句柄内部共享连接池，克隆开销很小
#[derive(Clone)]
pub struct MongoStockRepository {
    database: Database,
    collection: Collection<StockRecord>,
}

impl MongoStockRepository {
    /// 创建新的仓库实例
    ///
    /// # 参数
    ///
    /// * `database` - 已就绪的数据库句柄
    /// * `collection` - 集合名称
    pub fn new(database: Database, collection: &str) -> Self {
        let collection = database.collection::<StockRecord>(collection);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl StockRepository for MongoStockRepository {
    async fn find_matching(&self, query: &StockQuery) -> Result<Vec<StockRecord>, RepositoryError> {
        let filter = query.to_filter();
        debug!(?filter, collection = %self.collection.name(), "Executing find");

        let cursor = self.collection.find(filter).await?;
        let records: Vec<StockRecord> = cursor.try_collect().await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepositoryError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }
}
