// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kindcheck::dynamic::DynamicValue;
use kindcheck::{type_check, type_of, CheckPolicy, Checker, Reflect};

#[derive(Reflect)]
struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Reflect)]
struct Pose {
    position: Vector3,
    orientation: [f64; 4],
    covariance: [[f64; 6]; 6],
}

#[derive(Reflect)]
struct Trajectory {
    stamp: u64,
    poses: [Pose; 64],
}

fn sample_pose() -> Pose {
    Pose {
        position: Vector3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        },
        orientation: [0.0, 0.0, 0.0, 1.0],
        covariance: [[0.0; 6]; 6],
    }
}

/// Benchmark: classification of a scalar
fn bench_type_of_scalar(c: &mut Criterion) {
    c.bench_function("type_of_u64", |b| b.iter(|| type_of(black_box(&42u64))));
}

/// Benchmark: nested struct validation
fn bench_type_check_pose(c: &mut Criterion) {
    let pose = sample_pose();
    c.bench_function("type_check_pose", |b| b.iter(|| type_check(black_box(&pose))));
}

/// Benchmark: array sampling vs full sweep
fn bench_array_policies(c: &mut Criterion) {
    let trajectory = Trajectory {
        stamp: 0,
        poses: std::array::from_fn(|_| sample_pose()),
    };
    let sampled = Checker::default();
    let sweep = Checker::new(CheckPolicy::strict());

    c.bench_function("trajectory_first_element", |b| {
        b.iter(|| sampled.check_value(black_box(&trajectory)))
    });
    c.bench_function("trajectory_all_elements", |b| {
        b.iter(|| sweep.check_value(black_box(&trajectory)))
    });
}

/// Benchmark: dynamic struct validation
fn bench_dynamic(c: &mut Criterion) {
    let value = DynamicValue::struct_of([
        ("id", DynamicValue::U32(7)),
        ("samples", DynamicValue::from([1.0f64; 32])),
        ("origin", DynamicValue::UnsafePointer(0x1000)),
    ]);
    c.bench_function("type_check_dynamic", |b| b.iter(|| type_check(black_box(&value))));
}

criterion_group!(
    benches,
    bench_type_of_scalar,
    bench_type_check_pose,
    bench_array_policies,
    bench_dynamic
);
criterion_main!(benches);
