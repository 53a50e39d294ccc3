// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：股票记录
/// - 仓库接口（repositories）：只读存储抽象
/// - 搜索（search）：搜索模式与查询过滤
/// - 服务（services）：搜索流程编排
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
