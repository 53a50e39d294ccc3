// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 启动阶段无法建立到文档库的连接
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),

    /// 单次读取失败，仅影响当前请求
    #[error("query failed: {0}")]
    QueryError(String),
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        RepositoryError::QueryError(err.to_string())
    }
}
