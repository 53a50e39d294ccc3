// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use stockfinder::config::settings::Settings;
use stockfinder::infrastructure::database::connection;
use stockfinder::infrastructure::repositories::stock_repo_impl::MongoStockRepository;
use stockfinder::presentation::routes;
use stockfinder::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{error, info};

/// 主函数
///
/// 依次完成配置加载、存储连接与 HTTP 监听；存储未就绪前不会开始监听
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting stockfinder...");

    // 3. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 4. Connect to the record store
    let database = connection::connect(&settings.database)
        .await
        .inspect_err(|e| error!(error = %e, "Error connecting to record store"))?;
    let repo = Arc::new(MongoStockRepository::new(
        database,
        &settings.database.collection,
    ));

    // 5. Start HTTP server
    let app = routes::routes(repo);

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server is running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
