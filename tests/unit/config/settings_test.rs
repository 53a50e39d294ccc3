// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use stockfinder::config::settings::Settings;

/// 环境变量覆盖默认配置
///
/// 本文件是唯一修改进程环境变量的测试
#[test]
fn test_environment_overrides_defaults() {
    std::env::set_var("MONGO_URI", "mongodb://db.internal:27017");
    std::env::set_var("PORT", "8080");
    std::env::set_var("STOCKFINDER__DATABASE__COLLECTION", "Companies");

    let settings = Settings::new().unwrap();

    std::env::remove_var("MONGO_URI");
    std::env::remove_var("PORT");
    std::env::remove_var("STOCKFINDER__DATABASE__COLLECTION");

    assert_eq!(settings.database.url, "mongodb://db.internal:27017");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.database.collection, "Companies");
    assert_eq!(settings.database.name, "Stock");
}
