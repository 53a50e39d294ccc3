// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 表单页面、表单提交与 JSON 搜索接口
pub mod stock_handler;
