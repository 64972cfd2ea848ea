//! Integration tests for folio-analytics.
//!
//! These tests run the analytics end-to-end over a realistic mixed portfolio
//! and price history.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use folio_analytics::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn asset(symbol: &str, name: &str, asset_type: AssetType, price: Option<Decimal>) -> Asset {
    let mut asset = Asset::new(symbol, name, asset_type);
    asset.current_price = price;
    asset
}

fn holding(asset_id: u64, asset: Asset, quantity: Decimal, average_cost: Decimal) -> Holding {
    Holding::builder()
        .asset_id(asset_id)
        .quantity(quantity)
        .average_cost(average_cost)
        .asset(asset)
        .build()
        .unwrap()
}

/// A mixed portfolio: two stocks, an ETF, a bond fund, cash, and one
/// holding whose price has not been fetched yet.
fn mixed_portfolio() -> Vec<Holding> {
    vec![
        holding(
            1,
            asset("AAPL", "Apple Inc.", AssetType::Stock, Some(dec!(190))),
            dec!(50),
            dec!(150),
        ),
        holding(
            2,
            asset(
                "MSFT",
                "Microsoft Corporation",
                AssetType::Stock,
                Some(dec!(410)),
            ),
            dec!(20),
            dec!(420),
        ),
        holding(
            3,
            asset(
                "VTI",
                "Vanguard Total Stock Market ETF",
                AssetType::Etf,
                Some(dec!(250)),
            ),
            dec!(40),
            dec!(200),
        ),
        holding(
            4,
            asset(
                "BND",
                "Vanguard Total Bond Market ETF",
                AssetType::Bond,
                Some(dec!(72)),
            ),
            dec!(100),
            dec!(75),
        ),
        holding(
            5,
            asset("USD", "US Dollar", AssetType::Cash, Some(dec!(1))),
            dec!(5000),
            dec!(1),
        ),
        holding(
            6,
            asset("NVDA", "NVIDIA Corporation", AssetType::Stock, None),
            dec!(10),
            dec!(450),
        ),
    ]
}

fn daily_history(symbol: &str, closes: &[Decimal]) -> PriceHistory {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            HistoricalBar::new(
                start + Duration::days(i as i64),
                *close - dec!(1),
                *close + dec!(2),
                *close - dec!(2),
                *close,
                1_000_000 + i as u64,
            )
        })
        .collect();
    PriceHistory::new(&HistoricalRequest::for_symbol(symbol).unwrap(), bars)
}

// =============================================================================
// PERFORMANCE
// =============================================================================

#[test]
fn test_mixed_portfolio_performance() {
    let holdings = mixed_portfolio();
    let metrics = calculate_performance(&holdings, &AnalyticsConfig::default()).unwrap();

    // 9500 + 8200 + 10000 + 7200 + 5000 + 0
    assert_eq!(metrics.total_value, dec!(39900));
    // 7500 + 8400 + 8000 + 7500 + 5000 + 4500
    assert_eq!(metrics.total_cost, dec!(40900));
    assert_eq!(metrics.total_gain_loss, dec!(-1000));
    assert_eq!(metrics.stale_holdings, 1);
    assert_eq!(metrics.holding_count(), 6);
    assert_eq!(metrics.direction(), ChangeDirection::Down);

    let sum: Decimal = metrics.holdings.iter().map(|h| h.current_value).sum();
    assert_eq!(sum, metrics.total_value);

    let nvda = &metrics.holdings[5];
    assert_eq!(nvda.symbol, "NVDA");
    assert!(nvda.price_stale);
    assert_eq!(nvda.gain_loss, dec!(-4500));

    let aapl = &metrics.holdings[0];
    assert_eq!(aapl.gain_loss, dec!(2000));
    assert_eq!(aapl.gain_loss_percent.round_dp(2), dec!(26.67));
}

#[test]
fn test_sequential_and_default_config_agree() {
    let holdings: Vec<Holding> = (0..300).flat_map(|_| mixed_portfolio()).collect();
    let single = AnalyticsConfig::sequential();
    let parallel = AnalyticsConfig::default().with_threshold(1);

    let sequential = calculate_performance(&holdings, &single).unwrap();
    let threaded = calculate_performance(&holdings, &parallel).unwrap();
    assert_eq!(sequential, threaded);

    let sequential = calculate_diversification(&holdings, &single).unwrap();
    let threaded = calculate_diversification(&holdings, &parallel).unwrap();
    assert_eq!(sequential, threaded);
}

// =============================================================================
// DIVERSIFICATION AND ALLOCATION
// =============================================================================

#[test]
fn test_mixed_portfolio_diversification() {
    let holdings = mixed_portfolio();
    let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();

    assert_eq!(div.total_value, dec!(39900));
    let order: Vec<_> = div
        .by_asset
        .iter()
        .map(|w| w.asset.symbol.as_str())
        .collect();
    assert_eq!(order, vec!["VTI", "AAPL", "MSFT", "BND", "USD", "NVDA"]);

    let type_total: Decimal = div.by_asset_type.values().copied().sum();
    assert!((type_total - dec!(100)).abs() < dec!(0.000001));

    // (9500 + 8200) / 39900
    assert_eq!(div.type_weight(AssetType::Stock).round_dp(4), dec!(44.3609));
    assert_eq!(div.top(2).len(), 2);
}

#[test]
fn test_mixed_portfolio_allocation_and_summary() {
    let holdings = mixed_portfolio();
    let config = AnalyticsConfig::default();

    let alloc = calculate_allocation(&holdings, &config).unwrap();
    assert_eq!(alloc.total_value, dec!(39900));
    assert_eq!(alloc.by_asset_type[&AssetType::Stock].value, dec!(17700));
    assert_eq!(alloc.by_currency.len(), 1);
    assert_eq!(alloc.by_currency["USD"].percentage, dec!(100));

    let summary = calculate_position_summary(&holdings, &config).unwrap();
    assert_eq!(summary.total_positions, 6);
    assert_eq!(summary.priced_positions, 5);
    assert_eq!(summary.total_market_value, dec!(39900));
    assert_eq!(summary.total_cost_basis, dec!(36400));
    assert_eq!(summary.unrealized_gain_loss, dec!(3500));
    assert_eq!(summary.price_statistics.max, dec!(410));
    assert_eq!(summary.price_statistics.min, dec!(1));
    // (190 + 410 + 250 + 72 + 1) / 5
    assert_eq!(summary.price_statistics.mean, dec!(184.6));
}

// =============================================================================
// HISTORICAL SERIES
// =============================================================================

#[test]
fn test_history_request_to_series() {
    let request = HistoricalRequest::parse(" aapl ", "6mo", "1d").unwrap();
    let bars = daily_history("AAPL", &[dec!(148), dec!(150), dec!(153)]).bars;
    let history = PriceHistory::new(&request, bars)
        .with_name("Apple Inc.")
        .with_exchange("NMS");

    let series = normalize_series(&history, &AnalyticsConfig::default()).unwrap();

    assert_eq!(series.symbol, "AAPL");
    assert_eq!(series.name, "Apple Inc.");
    assert_eq!(series.exchange.as_deref(), Some("NMS"));
    assert_eq!(series.period, Period::SixMonths);
    assert_eq!(series.current_price, dec!(153));
    assert_eq!(series.daily_change, dec!(3));
    assert_eq!(series.daily_change_percent, dec!(2));
    assert_eq!(series.period_change, dec!(5));
    assert_eq!(series.period_change_percent.round_dp(3), dec!(3.378));
    assert_eq!(
        format_signed_percent(series.daily_change_percent, 2),
        "+2.00%",
    );
}

#[test]
fn test_long_history_is_capped() {
    let closes: Vec<Decimal> = (0..120).map(|i| dec!(100) + Decimal::from(i)).collect();
    let history = daily_history("SPY", &closes);
    let series = normalize_series(&history, &AnalyticsConfig::default()).unwrap();

    assert_eq!(series.data_points, 120);
    assert_eq!(series.total_bars, 120);
    assert_eq!(series.display_bars.len(), 50);
    assert!(series
        .display_bars
        .windows(2)
        .all(|w| w[0].date > w[1].date));
    assert_eq!(
        series.display_notice().unwrap(),
        "Showing latest 50 data points out of 120 total"
    );
}

#[test]
fn test_empty_history_fails() {
    let history = daily_history("ZZZZ", &[]);
    let err = normalize_series(&history, &AnalyticsConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        AnalyticsError::EmptySeries { ref symbol, .. } if symbol == "ZZZZ"
    ));
}

#[test]
fn test_history_from_provider_json() {
    let json = r#"{
        "symbol": "MSFT",
        "short_name": "Microsoft",
        "period": "1mo",
        "interval": "1wk",
        "bars": [
            {"date": "2024-03-04", "open": 410, "high": 415, "low": 405, "close": 412,
             "volume": 100},
            {"date": "2024-03-11", "open": 412, "high": 420, "low": 410, "close": 418,
             "volume": 120}
        ]
    }"#;
    let history: PriceHistory = serde_json::from_str(json).unwrap();
    let series = normalize_series(&history, &AnalyticsConfig::default()).unwrap();

    assert_eq!(series.name, "Microsoft");
    assert_eq!(series.currency, "USD");
    assert_eq!(series.interval, Interval::Weekly);
    assert_eq!(series.daily_change, dec!(6));
}

// =============================================================================
// LEDGER AND PRICE REFRESH
// =============================================================================

#[test]
fn test_replay_then_value() {
    let at = |d| Utc.with_ymd_and_hms(2024, 4, d, 15, 0, 0).unwrap();
    let log = vec![
        Transaction::new(1, 1, TransactionType::Buy, dec!(10), dec!(100), at(1)),
        Transaction::new(1, 1, TransactionType::Buy, dec!(10), dec!(200), at(2)),
        Transaction::new(1, 2, TransactionType::Buy, dec!(5), dec!(40), at(2)),
        Transaction::new(1, 2, TransactionType::Sell, dec!(5), dec!(45), at(3)),
        Transaction::new(1, 1, TransactionType::Sell, dec!(4), dec!(210), at(4)).with_fees(dec!(1)),
    ];
    let positions = replay_transactions(&log).unwrap();

    assert_eq!(positions.len(), 1);
    let pos = positions[&PositionKey::new(1, 1)];
    assert_eq!(pos, PositionState::new(dec!(16), dec!(150)));

    let holding = holding(
        1,
        asset("AAPL", "Apple Inc.", AssetType::Stock, Some(dec!(175))),
        pos.quantity,
        pos.average_cost,
    );
    let metrics = calculate_performance(&[holding], &AnalyticsConfig::default()).unwrap();
    assert_eq!(metrics.total_gain_loss, dec!(400));
}

#[test]
fn test_refresh_then_value() {
    let as_of = Utc.with_ymd_and_hms(2024, 6, 3, 21, 0, 0).unwrap();
    let holdings = mixed_portfolio();
    let assets: Vec<Asset> = holdings.iter().map(|h| h.asset.clone()).collect();
    let quotes: HashMap<String, Decimal> =
        [("NVDA".to_string(), dec!(1200)), ("USD".to_string(), dec!(1.5))]
            .into_iter()
            .collect();

    let refreshed = refresh_prices(&assets, &quotes, as_of);
    let holdings: Vec<Holding> = holdings
        .into_iter()
        .zip(refreshed)
        .map(|(h, a)| Holding { asset: a, ..h })
        .collect();

    let metrics = calculate_performance(&holdings, &AnalyticsConfig::default()).unwrap();
    assert_eq!(metrics.stale_holdings, 0);
    assert_eq!(metrics.total_value, dec!(51900));
    assert_eq!(holdings[4].asset.current_price, Some(dec!(1)));
    assert_eq!(holdings[5].asset.last_updated, Some(as_of));
}
