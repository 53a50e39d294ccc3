// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use std::sync::Arc;
use stockfinder::domain::models::stock::StockRecord;
use stockfinder::infrastructure::repositories::memory_stock_repo::InMemoryStockRepository;
use stockfinder::presentation::routes;

pub struct TestApp {
    pub server: TestServer,
    pub repo: Arc<InMemoryStockRepository>,
}

pub fn sample_records() -> Vec<StockRecord> {
    vec![
        StockRecord::new("Apple Inc", "AAPL", 150.25),
        StockRecord::new("Microsoft Corp", "MSFT", 410.1),
        StockRecord::new("Alphabet Inc", "GOOGL", 138.0),
    ]
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(vec![StockRecord::new("Apple Inc", "AAPL", 150.25)])
}

pub fn create_test_app_with(records: Vec<StockRecord>) -> TestApp {
    let repo = Arc::new(InMemoryStockRepository::new(records));
    let server = TestServer::new(routes::routes(repo.clone())).unwrap();
    TestApp { server, repo }
}
