//! Performance benchmarks for the Parking Engine.
//!
//! Covers the pure calculators and the HTTP path:
//! - Tiered fee for stays of increasing length
//! - Rule-text parsing and pricing
//! - `POST /fees/calculate` through the router
//! - A check-in/check-out cycle through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use parking_engine::api::{AppState, create_router};
use parking_engine::calculation::{PricingRules, calculate_fee, calculate_rule_fee};
use parking_engine::config::ConfigLoader;
use parking_engine::models::PricingPolicy;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const RULES: &str = "1 hour = $5, 2 hours = $8, 4 hours = $12, more than 4 hours = $20";

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config).expect("Failed to build state")
}

/// Benchmark: tiered fee for a range of stay lengths.
fn bench_tiered_fee(c: &mut Criterion) {
    let policy = PricingPolicy::new(Decimal::from(5), Decimal::from(25)).unwrap();
    let mut group = c.benchmark_group("tiered_fee");

    for hours in ["0.5", "5", "26", "730.25"] {
        let duration = Decimal::from_str(hours).unwrap();
        group.bench_with_input(BenchmarkId::new("hours", hours), &duration, |b, d| {
            b.iter(|| calculate_fee(black_box(*d), &policy, Some(Decimal::from(-2))))
        });
    }

    group.finish();
}

/// Benchmark: rule text, parsed once versus parsed per call.
fn bench_rule_fee(c: &mut Criterion) {
    let duration = Decimal::from_str("3.5").unwrap();
    let rules = PricingRules::parse(RULES).unwrap();

    c.bench_function("rule_fee_parsed", |b| {
        b.iter(|| rules.calculate(black_box(duration), None))
    });

    c.bench_function("rule_fee_from_text", |b| {
        b.iter(|| calculate_rule_fee(black_box(duration), black_box(RULES), None))
    });
}

/// Benchmark: a fee request through the router.
fn bench_api_fee(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({ "duration_hours": "26.5", "manual_adjustment": "-5" }).to_string();

    c.bench_function("api_fee_calculate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/fees/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: check a vehicle in and straight back out.
fn bench_api_stay_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let check_in = serde_json::json!({
        "license_plate": "BENCH01",
        "check_in_time": "2026-01-15T09:00:00Z"
    })
    .to_string();
    let check_out = serde_json::json!({
        "payment_method": "Cash",
        "check_out_time": "2026-01-15T12:00:00Z"
    })
    .to_string();

    c.bench_function("api_stay_cycle", |b| {
        b.to_async(&rt).iter(|| async {
            let mut responses = Vec::with_capacity(2);
            for (uri, body) in [
                ("/slots/1/check-in", &check_in),
                ("/slots/1/check-out", &check_out),
            ] {
                let response = router
                    .clone()
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri(uri)
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                responses.push(response);
            }
            black_box(responses)
        })
    });
}

criterion_group!(
    benches,
    bench_tiered_fee,
    bench_rule_fee,
    bench_api_fee,
    bench_api_stay_cycle,
);
criterion_main!(benches);
