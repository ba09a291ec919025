// ABOUTME: Criterion benchmarks for session registry operations over in-memory storage
// ABOUTME: Measures register, authenticate, and current-user latency as the collection grows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the session registry.
//!
//! Every write persists the whole collection, so register and authenticate
//! are measured against registries of increasing size.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heart_monitor::intelligence::{HeartRateZone, MaxHrAlgorithm};
use heart_monitor::models::RegistrationRequest;
use heart_monitor::registry::{RegistryConfig, SessionRegistry};
use heart_monitor::storage::memory::InMemoryStore;
use tokio::runtime::Runtime;

/// Collection sizes for benchmarking
const REGISTRY_SIZES: [usize; 3] = [10, 100, 1_000];

fn request(index: usize) -> RegistrationRequest {
    RegistrationRequest {
        email: format!("user{index}@bench.test"),
        password: "benchpass".to_owned(),
        weight: "70".to_owned(),
        height: "175".to_owned(),
        age: "30".to_owned(),
        gender: "female".to_owned(),
        activity_level: "active".to_owned(),
    }
}

fn empty_config() -> RegistryConfig {
    RegistryConfig {
        seed_defaults: false,
        ..RegistryConfig::default()
    }
}

/// Create a registry holding `size` profiles
fn populated_registry(rt: &Runtime, size: usize) -> SessionRegistry<InMemoryStore> {
    rt.block_on(async {
        let registry = SessionRegistry::load(InMemoryStore::new(), empty_config())
            .await
            .unwrap();
        for i in 0..size {
            registry.register(request(i)).await.unwrap();
        }
        registry
    })
}

/// Benchmark registration into registries of different sizes
fn bench_register(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("register");

    for size in REGISTRY_SIZES {
        let registry = populated_registry(&rt, size);
        group.bench_with_input(BenchmarkId::new("memory", size), &size, |b, &size| {
            let mut next = size;
            b.iter(|| {
                let req = request(next);
                next = next.wrapping_add(1);
                rt.block_on(async { registry.register(black_box(req)).await.unwrap() })
            });
        });
    }

    group.finish();
}

/// Benchmark sign-in (hit) and rejected sign-in (miss)
fn bench_authenticate(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("authenticate");

    for size in REGISTRY_SIZES {
        let registry = populated_registry(&rt, size);
        let email = format!("user{}@bench.test", size / 2);

        group.bench_with_input(BenchmarkId::new("hit", size), &email, |b, email| {
            b.iter(|| {
                rt.block_on(async {
                    registry
                        .authenticate(black_box(email), black_box("benchpass"))
                        .await
                        .unwrap()
                })
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", size), &email, |b, email| {
            b.iter(|| {
                rt.block_on(async {
                    registry
                        .authenticate(black_box(email), black_box("wrongpass"))
                        .await
                        .is_err()
                })
            });
        });
    }

    group.finish();
}

/// Benchmark the cached current-user read
fn bench_current_user(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let registry = populated_registry(&rt, 100);

    c.bench_function("current_user_cached", |b| {
        b.iter(|| rt.block_on(async { black_box(registry.current_user().await) }));
    });
}

/// Benchmark zone classification for a reading
fn bench_zone_classify(c: &mut Criterion) {
    let max_hr = MaxHrAlgorithm::Tanaka.estimate(35, None).unwrap();

    c.bench_function("zone_classify", |b| {
        let mut bpm = 60.0_f64;
        b.iter(|| {
            bpm = if bpm > 200.0 { 60.0 } else { bpm + 1.0 };
            HeartRateZone::classify(black_box(bpm), black_box(max_hr))
        });
    });
}

criterion_group!(
    benches,
    bench_register,
    bench_authenticate,
    bench_current_user,
    bench_zone_classify
);
criterion_main!(benches);
