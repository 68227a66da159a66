//! Performance benchmarks for the tool rental engine.
//!
//! Covers the pure charge calculation for short and long rentals and a full
//! `/checkout` round trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use tool_rental::api::{AppState, create_router};
use tool_rental::calculation::calculate_agreement;
use tool_rental::config::ToolInventory;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Benchmark: charge calculation over increasing rental lengths.
fn bench_calculate_agreement(c: &mut Criterion) {
    let inventory = ToolInventory::standard();
    let tool = inventory.get("LADW").unwrap().clone();
    let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();

    let mut group = c.benchmark_group("calculate_agreement");
    for rental_days in [3u32, 30, 365] {
        group.throughput(Throughput::Elements(u64::from(rental_days)));
        group.bench_with_input(
            BenchmarkId::from_parameter(rental_days),
            &rental_days,
            |b, &rental_days| {
                b.iter(|| {
                    calculate_agreement(black_box(&tool), black_box(checkout), rental_days, 10)
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: a single checkout through the router.
fn bench_checkout_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ToolInventory::standard()));
    let body = serde_json::json!({
        "tool_code": "CHNS",
        "rental_days": 5,
        "discount_percent": 25,
        "checkout_date": "2015-07-02"
    })
    .to_string();

    c.bench_function("checkout_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/checkout")
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

criterion_group!(benches, bench_calculate_agreement, bench_checkout_endpoint);
criterion_main!(benches);
