// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stock::StockRecord;
use html_escape::encode_text;

pub const MSG_MISSING_QUERY: &str = "No search query provided.";
pub const MSG_INVALID_MODE: &str = "Invalid search type provided.";
pub const MSG_NO_RESULTS: &str = "No results found.";
pub const MSG_SEARCH_ERROR: &str = "Error occurred during search.";

/// 搜索表单页面
pub const SEARCH_FORM: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Stock Search</title>
  </head>
  <body>
    <h1>Search for a Stock</h1>
    <form method="GET" action="/process">
      <label for="searchQuery">Enter Company Name or Ticker Symbol:</label>
      <input type="text" id="searchQuery" name="searchQuery" required>

      <br><br>

      <label for="searchTicker">Search by Ticker Symbol:</label>
      <input type="radio" id="searchTicker" name="searchType" value="ticker" required>

      <label for="searchCompany">Search by Company Name:</label>
      <input type="radio" id="searchCompany" name="searchType" value="company">

      <br><br>

      <button type="submit">Search</button>
    </form>
  </body>
</html>
"#;

pub fn search_complete_message(count: usize) -> String {
    format!("Search complete! Found {} result(s).", count)
}

/// 结果页面
///
/// 所有动态内容都经过 HTML 转义
pub fn results_page(message: &str, records: &[StockRecord]) -> String {
    let mut body = format!("    <p>{}</p>\n", encode_text(message));

    if !records.is_empty() {
        body.push_str("    <table>\n");
        body.push_str("      <tr><th>Company</th><th>Ticker</th><th>Price</th></tr>\n");
        for record in records {
            body.push_str(&format!(
                "      <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                encode_text(&record.company),
                encode_text(&record.ticker),
                encode_text(&record.display_price()),
            ));
        }
        body.push_str("    </table>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>Stock Search Results</title>\n  </head>\n  <body>\n{}    <p><a href=\"/\">New search</a></p>\n  </body>\n</html>\n",
        body
    )
}
