// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 股票搜索服务（stock_search_service）协调查询校验与仓库读取
pub mod stock_search_service;
