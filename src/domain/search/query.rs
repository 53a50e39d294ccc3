// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::{doc, Document};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::stock::StockRecord;

/// 查询参数校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchInputError {
    #[error("no search query provided")]
    MissingQuery,

    #[error("invalid search type: {0:?}")]
    InvalidSearchMode(String),
}

/// 搜索模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// 按股票代码精确匹配
    Ticker,
    /// 按公司名称模糊匹配（忽略大小写）
    Company,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Ticker => "ticker",
            SearchMode::Company => "company",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = SearchInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ticker" => Ok(SearchMode::Ticker),
            "company" => Ok(SearchMode::Company),
            other => Err(SearchInputError::InvalidSearchMode(other.to_string())),
        }
    }
}

/// 经过校验的股票查询
///
/// 在访问文档库之前由原始查询参数构建，之后的读取不会再遇到
/// "模式未知" 的情况。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockQuery {
    Ticker(String),
    Company(String),
}

impl StockQuery {
    /// 由原始参数构建查询
    ///
    /// 先检查查询文本（缺失、空串或全空白均视为缺失），再检查模式，
    /// 因此无论模式为何，空文本总是返回 `MissingQuery`。
    /// 文本本身保持原样，不做裁剪。
    ///
    /// # 参数
    ///
    /// * `text` - 表单中的 `searchQuery`
    /// * `mode` - 表单中的 `searchType`
    pub fn parse(text: Option<&str>, mode: Option<&str>) -> Result<Self, SearchInputError> {
        // Whitespace-only text can never match a ticker and matches every company
        let text = match text {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(SearchInputError::MissingQuery),
        };

        let mode = mode
            .ok_or_else(|| SearchInputError::InvalidSearchMode(String::new()))?
            .parse::<SearchMode>()?;

        Ok(Self::new(mode, text))
    }

    pub fn new(mode: SearchMode, text: impl Into<String>) -> Self {
        match mode {
            SearchMode::Ticker => StockQuery::Ticker(text.into()),
            SearchMode::Company => StockQuery::Company(text.into()),
        }
    }

    pub fn mode(&self) -> SearchMode {
        match self {
            StockQuery::Ticker(_) => SearchMode::Ticker,
            StockQuery::Company(_) => SearchMode::Company,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            StockQuery::Ticker(text) | StockQuery::Company(text) => text,
        }
    }

    /// 转换为 MongoDB 过滤文档
    ///
    /// 公司名称的正则经过转义，按字面子串匹配。
    pub fn to_filter(&self) -> Document {
        match self {
            StockQuery::Ticker(text) => doc! { "ticker": text.as_str() },
            StockQuery::Company(text) => {
                let pattern = regex::escape(text);
                doc! { "company": { "$regex": pattern, "$options": "i" } }
            }
        }
    }

    /// 在进程内对单条记录求值，与 `to_filter` 的语义一致
    pub fn matches(&self, record: &StockRecord) -> bool {
        match self {
            StockQuery::Ticker(text) => record.ticker == *text,
            StockQuery::Company(text) => record
                .company
                .to_lowercase()
                .contains(&text.to_lowercase()),
        }
    }
}

impl fmt::Display for StockQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.mode(), self.text())
    }
}
