//! End-to-end tests for the `folio` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HOLDINGS: &str = r#"[
    {
        "asset_id": 1,
        "quantity": 10,
        "average_cost": 150,
        "asset": {"symbol": "AAPL", "name": "Apple Inc.", "asset_type": "stock",
                  "current_price": 180}
    },
    {
        "asset_id": 2,
        "quantity": 20,
        "average_cost": 80,
        "asset": {"symbol": "BND", "name": "Total Bond", "asset_type": "bond",
                  "current_price": 75, "currency": "USD"}
    },
    {
        "asset_id": 3,
        "quantity": 5,
        "average_cost": 40,
        "asset": {"symbol": "NEW", "name": "Unpriced Co", "asset_type": "etf"}
    }
]"#;

const TRANSACTIONS: &str = r#"[
    {"portfolio_id": 1, "asset_id": 1, "transaction_type": "buy", "quantity": 10, "price": 100,
     "total_amount": 1000, "transaction_date": "2024-01-02T15:00:00Z"},
    {"portfolio_id": 1, "asset_id": 1, "transaction_type": "buy", "quantity": 10, "price": 200,
     "total_amount": 2000, "transaction_date": "2024-01-03T15:00:00Z"},
    {"portfolio_id": 2, "asset_id": 9, "transaction_type": "buy", "quantity": 1, "price": 5,
     "total_amount": 5, "transaction_date": "2024-01-03T15:00:00Z"}
]"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").unwrap();
        cmd.env("FOLIO_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG");
        cmd
    }
}

fn history_json(closes: &[u32]) -> String {
    let bars: Vec<String> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                r#"{{"date": "2024-01-{:02}", "open": {c}, "high": {c},
                    "low": {c}, "close": {c}, "volume": 10}}"#,
                i + 1
            )
        })
        .collect();
    format!(
        r#"{{"symbol": "aapl", "name": "Apple Inc.", "bars": [{}]}}"#,
        bars.join(",")
    )
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn performance_json_totals() {
    let fx = Fixture::new();
    let holdings = fx.write("holdings.json", HOLDINGS);

    let args = [
        "performance",
        "--holdings",
        path_arg(&holdings),
        "--format",
        "json",
    ];
    let value = json_stdout(fx.cmd().args(args));

    assert_eq!(value["total_value"].as_f64(), Some(3300.0));
    assert_eq!(value["total_cost"].as_f64(), Some(3300.0));
    assert_eq!(value["stale_holdings"].as_u64(), Some(1));
    assert_eq!(value["holdings"][2]["price_stale"].as_bool(), Some(true));
}

#[test]
fn performance_table_warns_about_stale_prices() {
    let fx = Fixture::new();
    let holdings = fx.write("holdings.json", HOLDINGS);

    fx.cmd()
        .args(["performance", "--holdings", path_arg(&holdings)])
        .assert()
        .success()
        .stdout(predicate::str::contains("AAPL"))
        .stdout(predicate::str::contains("Portfolio Totals"))
        .stderr(predicate::str::contains("no current price"));
}

#[test]
fn performance_reads_stdin() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["performance", "--holdings", "-", "--format", "minimal"])
        .write_stdin(HOLDINGS)
        .assert()
        .success()
        .stdout("3300.00\n");
}

#[test]
fn diversification_orders_by_value() {
    let fx = Fixture::new();
    let holdings = fx.write("holdings.json", HOLDINGS);

    let args = [
        "diversification",
        "--holdings",
        path_arg(&holdings),
        "-f",
        "json",
    ];
    let value = json_stdout(fx.cmd().args(args));
    let symbols: Vec<&str> = value["by_asset"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["asset"]["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["AAPL", "BND", "NEW"]);
    let stock = &value["by_asset_type"]["stock"];
    assert!(stock.is_number() || stock.is_string());
}

#[test]
fn allocation_and_summary_run() {
    let fx = Fixture::new();
    let holdings = fx.write("holdings.json", HOLDINGS);

    fx.cmd()
        .args(["allocation", "--holdings", path_arg(&holdings), "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency,USD"));

    let args = ["summary", "--holdings", path_arg(&holdings), "-f", "json"];
    let value = json_stdout(fx.cmd().args(args));
    assert_eq!(value["total_positions"].as_u64(), Some(3));
    assert_eq!(value["priced_positions"].as_u64(), Some(2));
}

#[test]
fn invalid_holding_is_rejected() {
    let fx = Fixture::new();
    let holdings = fx.write(
        "bad.json",
        r#"[{"asset_id": 1, "quantity": -1, "average_cost": 1,
             "asset": {"symbol": "AAPL", "name": "Apple", "asset_type": "stock"}}]"#,
    );

    fx.cmd()
        .args(["performance", "--holdings", path_arg(&holdings)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity cannot be negative"));
}

#[test]
fn history_normalizes_and_caps() {
    let fx = Fixture::new();
    let closes: Vec<u32> = (100..130).collect();
    let file = fx.write("aapl.json", &history_json(&closes));

    let value = json_stdout(fx.cmd().args([
        "history",
        "--file",
        path_arg(&file),
        "--period",
        "1mo",
        "--limit",
        "5",
        "-f",
        "json",
    ]));

    assert_eq!(value["symbol"], "AAPL");
    assert_eq!(value["period"], "1mo");
    assert_eq!(value["total_bars"].as_u64(), Some(30));
    assert_eq!(value["display_bars"].as_array().unwrap().len(), 5);
    assert_eq!(value["display_bars"][0]["date"], "2024-01-30");
    assert_eq!(value["daily_change"].as_f64(), Some(1.0));
}

#[test]
fn history_table_shows_notice() {
    let fx = Fixture::new();
    let closes: Vec<u32> = (1..=28).collect();
    let file = fx.write("aapl.json", &history_json(&closes));

    fx.cmd()
        .args(["history", "--file", path_arg(&file), "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Showing latest 10 data points out of 28 total",
        ));
}

#[test]
fn history_empty_series_fails() {
    let fx = Fixture::new();
    let file = fx.write("empty.json", &history_json(&[]));

    fx.cmd()
        .args(["history", "--file", path_arg(&file)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data available for this symbol"));
}

#[test]
fn history_rejects_unknown_period() {
    let fx = Fixture::new();
    let file = fx.write("aapl.json", &history_json(&[1, 2]));

    fx.cmd()
        .args(["history", "--file", path_arg(&file), "--period", "7w"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown period '7w'"));
}

#[test]
fn replay_builds_positions() {
    let fx = Fixture::new();
    let file = fx.write("txns.json", TRANSACTIONS);

    let value = json_stdout(fx.cmd().args([
        "replay",
        "--transactions",
        path_arg(&file),
        "--portfolio",
        "1",
        "-f",
        "json",
    ]));
    let positions = value.as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["portfolio_id"].as_u64(), Some(1));
    assert_eq!(positions[0]["asset_id"].as_u64(), Some(1));
    assert_eq!(positions[0]["quantity"].as_f64(), Some(20.0));
    assert_eq!(positions[0]["average_cost"].as_f64(), Some(150.0));
}

#[test]
fn replay_rejects_sell_from_another_portfolio() {
    let fx = Fixture::new();
    let file = fx.write(
        "txns.json",
        r#"[
            {"portfolio_id": 1, "asset_id": 7, "transaction_type": "buy", "quantity": 10,
             "price": 100, "total_amount": 1000, "transaction_date": "2024-01-01T15:00:00Z"},
            {"portfolio_id": 2, "asset_id": 7, "transaction_type": "sell", "quantity": 5,
             "price": 110, "total_amount": 550, "transaction_date": "2024-01-02T15:00:00Z"}
        ]"#,
    );

    fx.cmd()
        .args(["replay", "--transactions", path_arg(&file)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient holdings"));
}

#[test]
fn refresh_skips_cash() {
    let fx = Fixture::new();
    let assets = fx.write(
        "assets.json",
        r#"[{"symbol": "AAPL", "name": "Apple", "asset_type": "stock"},
            {"symbol": "USD", "name": "Cash", "asset_type": "cash", "current_price": 1}]"#,
    );
    let quotes = fx.write("quotes.json", r#"{"AAPL": 190.5, "USD": 2}"#);

    let value = json_stdout(fx.cmd().args([
        "refresh",
        "--assets",
        path_arg(&assets),
        "--quotes",
        path_arg(&quotes),
        "--as-of",
        "2024-05-01T20:00:00Z",
        "-f",
        "json",
    ]));
    assert_eq!(value[0]["current_price"].as_f64(), Some(190.5));
    assert_eq!(value[0]["last_updated"], "2024-05-01T20:00:00Z");
    assert_eq!(value[1]["current_price"].as_f64(), Some(1.0));
}

#[test]
fn config_set_get_reset() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["config", "set", "default_format", "JSON"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_format = json"));

    fx.cmd()
        .args(["config", "get", "format", "-f", "minimal"])
        .assert()
        .success()
        .stdout("json\n");

    assert!(fx.config_dir().join("config.json").exists());

    // stored default format now applies without --format
    let holdings = fx.write("holdings.json", HOLDINGS);
    let args = ["summary", "--holdings", path_arg(&holdings)];
    let value = json_stdout(fx.cmd().args(args));
    assert_eq!(value["total_positions"].as_u64(), Some(3));

    fx.cmd()
        .args(["config", "reset", "--all"])
        .assert()
        .success();
    fx.cmd()
        .args(["config", "get", "default_format", "-f", "minimal"])
        .assert()
        .success()
        .stdout("table\n");
}

#[test]
fn config_rejects_bad_values() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["config", "set", "display_limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for display_limit"));

    fx.cmd()
        .args(["config", "set", "daycount", "act360"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}
