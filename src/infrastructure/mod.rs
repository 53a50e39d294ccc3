// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 负责与外部文档库的交互：
/// - 数据库（database）：连接建立与就绪检查
/// - 仓库实现（repositories）：领域仓库接口的具体实现
pub mod database;
pub mod repositories;
