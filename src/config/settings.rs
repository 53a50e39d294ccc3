// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器与文档数据库两部分配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// MongoDB 连接字符串
    pub url: String,
    /// 数据库名称
    pub name: String,
    /// 股票记录所在的集合名称
    pub collection: String,
    /// 连接与服务器选择超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 上报给服务端的应用名称
    pub app_name: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次合并默认值、配置文件、`STOCKFINDER__*` 环境变量，
    /// 最后由 `MONGO_URI` 与 `PORT` 覆盖连接字符串和端口
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let mongo_uri = std::env::var("MONGO_URI").ok();
        let port = std::env::var("PORT").ok();

        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("STOCKFINDER").separator("__"))
            .set_override_option("database.url", mongo_uri)?
            .set_override_option("server.port", port)?
            .build()?
            .try_deserialize()
    }

    /// 仅包含内置默认值的配置，不读取文件与环境变量
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "mongodb://localhost:27017")?
            .set_default("database.name", "Stock")?
            .set_default("database.collection", "PublicCompanies")?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.app_name", "stockfinder")
    }

    /// 服务器监听地址，形如 `host:port`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
