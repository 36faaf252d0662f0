// Copyright 2025 the Fiducial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::FRAC_PI_4;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use fiducial_surface::{
    BoundaryCheck, ConvexPolygonBounds, DiamondBounds, DiscTrapezoidBounds, EllipseBounds,
    RadialBounds, RectangleBounds, SurfaceBounds, TrapezoidBounds, TriangleBounds,
};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, extent: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            Point::new(
                (rng.next_f64() - 0.5) * 2.0 * extent,
                (rng.next_f64() - 0.5) * 2.0 * extent,
            )
        })
        .collect()
}

fn shapes() -> Vec<(&'static str, SurfaceBounds)> {
    vec![
        ("rectangle", RectangleBounds::new(10.0, 5.0).unwrap().into()),
        ("trapezoid", TrapezoidBounds::new(4.0, 9.0, 6.0).unwrap().into()),
        (
            "diamond",
            DiamondBounds::new(3.0, 9.0, 5.0, 4.0, 6.0).unwrap().into(),
        ),
        (
            "ellipse",
            EllipseBounds::new(2.0, 9.0, 1.0, 6.0, FRAC_PI_4, 0.5)
                .unwrap()
                .into(),
        ),
        (
            "radial",
            RadialBounds::new(2.0, 9.0, 0.5, FRAC_PI_4).unwrap().into(),
        ),
        (
            "disc_trapezoid",
            DiscTrapezoidBounds::new(1.0, 5.0, 2.0, 6.0, 0.0, 0.0)
                .unwrap()
                .into(),
        ),
        (
            "triangle",
            TriangleBounds::new([Point::new(-4.0, -3.0), Point::new(6.0, -2.0), Point::new(1.0, 7.0)])
                .unwrap()
                .into(),
        ),
        (
            "convex_polygon",
            ConvexPolygonBounds::new(
                (0..8)
                    .map(|i| {
                        let phi = f64::from(i) * FRAC_PI_4;
                        Point::new(8.0 * phi.cos(), 5.0 * phi.sin())
                    })
                    .collect(),
            )
            .unwrap()
            .into(),
        ),
    ]
}

fn bench_inside(c: &mut Criterion) {
    let mut group = c.benchmark_group("inside");
    let points = gen_points(4096, 12.0);
    let checks = [
        ("exact", BoundaryCheck::exact()),
        ("absolute", BoundaryCheck::absolute(0.5, 0.05)),
    ];
    group.throughput(Throughput::Elements(points.len() as u64));
    for (name, bounds) in shapes() {
        for (check_name, check) in &checks {
            group.bench_function(format!("{name}_{check_name}"), |b| {
                b.iter(|| {
                    let hits = points
                        .iter()
                        .filter(|p| bounds.inside(**p, check))
                        .count();
                    black_box(hits);
                });
            });
        }
    }
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_to_boundary");
    let points = gen_points(4096, 12.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    for (name, bounds) in shapes() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let sum: f64 = points.iter().map(|p| bounds.distance_to_boundary(*p)).sum();
                black_box(sum);
            });
        });
    }
    group.finish();
}

fn bench_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertices");
    for (name, bounds) in shapes() {
        for &segments in &[1u32, 72] {
            group.bench_function(format!("{name}_seg{segments}"), |b| {
                b.iter(|| black_box(bounds.vertices(black_box(segments))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_inside, bench_distance, bench_vertices);
criterion_main!(benches);
