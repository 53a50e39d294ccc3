// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供股票记录仓库的 MongoDB 实现与进程内实现
pub mod memory_stock_repo;
pub mod stock_repo_impl;
