// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use fiducial_volume::{CuboidVolumeBounds, DoubleTrapezoidVolumeBounds, VolumeBounds};
use nalgebra::{Isometry3, Translation3, UnitQuaternion};

fn placement() -> Isometry3<f64> {
    Isometry3::from_parts(
        Translation3::new(120.0, -40.0, 900.0),
        UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3),
    )
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose_to_surfaces");
    let volumes: [(&str, VolumeBounds); 2] = [
        ("cuboid", CuboidVolumeBounds::new(10.0, 20.0, 30.0).unwrap().into()),
        (
            "double_trapezoid",
            DoubleTrapezoidVolumeBounds::new(5.0, 20.0, 10.0, 15.0, 25.0, 30.0)
                .unwrap()
                .into(),
        ),
    ];
    let transform = placement();
    for (name, volume) in &volumes {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(volume.decompose_to_surfaces(black_box(&transform))));
        });
    }
    group.finish();
}

fn bench_construct_and_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_and_bound");
    group.bench_function("double_trapezoid", |b| {
        b.iter_batched(
            placement,
            |transform| {
                let volume =
                    DoubleTrapezoidVolumeBounds::new(5.0, 20.0, 10.0, 15.0, 25.0, 30.0).unwrap();
                black_box(volume.bounding_box(Some(&transform), 1.0));
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_decompose, bench_construct_and_bound);
criterion_main!(benches);
