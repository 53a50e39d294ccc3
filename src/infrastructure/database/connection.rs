// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use crate::utils::errors::RepositoryError;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::{debug, info};

/// 建立到文档库的连接
///
/// 解析连接字符串并发送一次 `ping`，只有在服务端应答后才返回，
/// 调用方可以据此判断存储已就绪。
///
/// # 参数
///
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(Database)` - 已就绪的数据库句柄
/// * `Err(RepositoryError::StoreUnavailable)` - 连接或握手失败
pub async fn connect(settings: &DatabaseSettings) -> Result<Database, RepositoryError> {
    let unavailable = |e: mongodb::error::Error| RepositoryError::StoreUnavailable(e.to_string());

    let mut options = ClientOptions::parse(&settings.url)
        .await
        .map_err(unavailable)?;

    if let Some(timeout) = settings.connect_timeout {
        options.connect_timeout = Some(Duration::from_secs(timeout));
        options.server_selection_timeout = Some(Duration::from_secs(timeout));
    }

    if let Some(app_name) = &settings.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options).map_err(unavailable)?;
    let database = client.database(&settings.name);

    debug!(database = %settings.name, "Pinging record store");
    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(unavailable)?;

    info!(database = %settings.name, "Record store connected");
    Ok(database)
}
