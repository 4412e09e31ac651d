// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use geo_types::{Geometry, Point, Rect, coord};
use quadrant_predicates::{Contains, Intersects, SpatialPredicate};
use quadrant_zones::{LeafZoneTable, Rectangle};

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

const UNIVERSE: Rectangle = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);

fn gen_squares(count: usize, size: f64) -> Vec<Geometry<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * (1000.0 - size);
            let y0 = rng.next_f64() * (1000.0 - size);
            Rect::new(coord! { x: x0, y: y0 }, coord! { x: x0 + size, y: y0 + size })
                .to_polygon()
                .into()
        })
        .collect()
}

fn gen_points(count: usize) -> Vec<Geometry<f64>> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0).into())
        .collect()
}

/// Every (polygon, point) pair replicated to the partitions both envelopes touch.
fn dispatch(
    zones: &LeafZoneTable,
    left: &[Geometry<f64>],
    right: &[Geometry<f64>],
) -> Vec<(usize, usize, usize)> {
    use quadrant_predicates::SpatialRelate;
    let mut out = Vec::new();
    for (i, a) in left.iter().enumerate() {
        let ea = a.envelope().expect("non-empty");
        for (j, b) in right.iter().enumerate() {
            let eb = b.envelope().expect("non-empty");
            for p in zones.overlapping(&ea) {
                if zones.zones()[p].intersects(&eb) {
                    out.push((p, i, j));
                }
            }
        }
    }
    out
}

fn bench_intersects(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersects");
    let polys = gen_squares(200, 40.0);
    let points = gen_points(200);
    for &n in &[4usize, 16, 64] {
        let zones = Arc::new(LeafZoneTable::uniform(UNIVERSE, n, n).unwrap());
        let work = dispatch(&zones, &polys, &points);
        let plain = Intersects::new();
        let dedup = Intersects::with_zones(zones.clone());
        group.throughput(Throughput::Elements(work.len() as u64));
        group.bench_function(format!("plain_grid{}", n), |b| {
            b.iter(|| {
                let hits = work
                    .iter()
                    .filter(|(_, i, j)| plain.evaluate(&polys[*i], &points[*j]))
                    .count();
                black_box(hits);
            })
        });
        group.bench_function(format!("dedup_grid{}", n), |b| {
            b.iter(|| {
                let hits = work
                    .iter()
                    .filter(|(p, i, j)| {
                        dedup
                            .evaluate_in_partition(*p, &polys[*i], &points[*j])
                            .unwrap()
                    })
                    .count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let polys = gen_squares(100, 60.0);
    let points = gen_points(100);
    let zones = Arc::new(LeafZoneTable::uniform(UNIVERSE, 16, 16).unwrap());
    let work = dispatch(&zones, &polys, &points);
    let dedup = Contains::with_zones(zones.clone());
    group.throughput(Throughput::Elements(work.len() as u64));
    group.bench_function("dedup_grid16", |b| {
        b.iter(|| {
            let hits = work
                .iter()
                .filter(|(p, i, j)| {
                    dedup
                        .evaluate_in_partition(*p, &polys[*i], &points[*j])
                        .unwrap()
                })
                .count();
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_ownership(c: &mut Criterion) {
    let mut group = c.benchmark_group("ownership");
    let zones = LeafZoneTable::uniform(UNIVERSE, 32, 32).unwrap();
    let regions: Vec<_> = (0..zones.len()).map(|p| zones.region(p).unwrap()).collect();
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let pts: Vec<_> = (0..4096)
        .map(|_| kurbo::Point::new(rng.next_f64() * 1000.0, rng.next_f64() * 1000.0))
        .collect();
    group.throughput(Throughput::Elements(pts.len() as u64));
    group.bench_function("owner_scan_grid32", |b| {
        b.iter(|| {
            let owned: usize = pts
                .iter()
                .map(|&p| regions.iter().filter(|r| r.owns(p)).count())
                .sum();
            black_box(owned);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_intersects, bench_contains, bench_ownership);
criterion_main!(benches);
