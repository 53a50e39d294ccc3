// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::sample_records;
use stockfinder::config::settings::Settings;
use stockfinder::domain::models::stock::StockRecord;
use stockfinder::domain::repositories::stock_repository::StockRepository;
use stockfinder::domain::search::query::StockQuery;
use stockfinder::infrastructure::database::connection;
use stockfinder::infrastructure::repositories::stock_repo_impl::MongoStockRepository;
use stockfinder::utils::errors::RepositoryError;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::GenericImage;

/// 无法连接时返回 StoreUnavailable
#[tokio::test]
async fn connect_fails_fast_when_store_is_unreachable() {
    let mut settings = Settings::defaults().unwrap().database;
    settings.url = "mongodb://127.0.0.1:1".to_string();
    settings.connect_timeout = Some(1);

    let err = connection::connect(&settings).await.unwrap_err();

    assert!(matches!(err, RepositoryError::StoreUnavailable(_)));
}

/// 使用真实 MongoDB 验证过滤表达式
///
/// 需要 Docker，默认忽略
#[tokio::test]
#[ignore]
async fn mongo_repository_applies_filters() {
    let mongo_node = GenericImage::new("mongo", "7")
        .with_exposed_port(27017.tcp())
        .with_wait_for(WaitFor::message_on_stdout("Waiting for connections"))
        .start()
        .await
        .expect("Failed to start MongoDB");
    let port = mongo_node
        .get_host_port_ipv4(27017)
        .await
        .expect("Failed to get MongoDB port");

    let mut settings = Settings::defaults().unwrap().database;
    settings.url = format!("mongodb://127.0.0.1:{}", port);

    let database = connection::connect(&settings).await.unwrap();
    database
        .collection::<StockRecord>(&settings.collection)
        .insert_many(sample_records())
        .await
        .unwrap();

    let repo = MongoStockRepository::new(database, &settings.collection);
    repo.ping().await.unwrap();

    let found = repo
        .find_matching(&StockQuery::Ticker("AAPL".into()))
        .await
        .unwrap();
    assert_eq!(found, vec![StockRecord::new("Apple Inc", "AAPL", 150.25)]);

    let found = repo
        .find_matching(&StockQuery::Ticker("aapl".into()))
        .await
        .unwrap();
    assert!(found.is_empty());

    let mut tickers: Vec<_> = repo
        .find_matching(&StockQuery::Company("inc".into()))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.ticker)
        .collect();
    tickers.sort();
    assert_eq!(tickers, vec!["AAPL", "GOOGL"]);

    // Regex metacharacters are matched literally
    let found = repo
        .find_matching(&StockQuery::Company(".*".into()))
        .await
        .unwrap();
    assert!(found.is_empty());
}
