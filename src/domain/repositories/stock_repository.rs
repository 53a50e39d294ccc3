// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stock::StockRecord;
use crate::domain::search::query::StockQuery;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 股票记录仓库特质
///
/// 只读访问外部文档库。实现需可被多个请求并发共享，
/// 领域层不依赖于具体的存储实现。
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// 查询匹配的股票记录
    ///
    /// # 参数
    ///
    /// * `query` - 经过校验的查询
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<StockRecord>)` - 零或多条记录，顺序由存储决定
    /// * `Err(RepositoryError::QueryError)` - 读取失败
    async fn find_matching(&self, query: &StockQuery) -> Result<Vec<StockRecord>, RepositoryError>;

    /// 检查存储是否可用
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 存储可用
    /// * `Err(RepositoryError)` - 存储不可用
    async fn ping(&self) -> Result<(), RepositoryError>;
}
