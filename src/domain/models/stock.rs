// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 股票记录
///
/// 由外部文档库持有，本系统只读取，不创建、修改或删除
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockRecord {
    /// 公司名称
    pub company: String,
    /// 股票代码
    pub ticker: String,
    /// 价格
    pub price: f64,
}

impl StockRecord {
    pub fn new(company: impl Into<String>, ticker: impl Into<String>, price: f64) -> Self {
        Self {
            company: company.into(),
            ticker: ticker.into(),
            price,
        }
    }

    /// 价格按货币格式显示，保留两位小数
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
