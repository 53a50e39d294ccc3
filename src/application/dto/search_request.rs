// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stock::StockRecord;
use crate::domain::search::query::SearchMode;
use crate::domain::services::stock_search_service::SearchOutcome;
use serde::{Deserialize, Serialize};

/// 搜索请求查询参数
///
/// 字段名与表单中的 `searchQuery` / `searchType` 保持一致，
/// 两者都可能缺失，由领域层负责校验
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchParamsDto {
    #[serde(rename = "searchQuery")]
    pub search_query: Option<String>,
    #[serde(rename = "searchType")]
    pub search_type: Option<String>,
}

impl SearchParamsDto {
    /// 由原始键值对构建参数，同名参数只取第一次出现的值
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "searchQuery" => &mut params.search_query,
                "searchType" => &mut params.search_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub query: String,
    pub search_type: SearchMode,
    pub count: usize,
    pub results: Vec<StockRecord>,
}

impl From<SearchOutcome> for SearchResponseDto {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            query: outcome.query.text().to_string(),
            search_type: outcome.query.mode(),
            count: outcome.records.len(),
            results: outcome.records,
        }
    }
}
