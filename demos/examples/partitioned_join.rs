// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioned join.
//!
//! Load point and polygon rows from WKT, replicate both sides to a uniform grid the way a
//! distributed engine would, and evaluate `ST_Contains` in every partition. Each polygon
//! `[i - 0.5, i + 0.5]^2` covers exactly one point `(i, i)`, so the deduplicated join must
//! report exactly one row per polygon even though many pairs land in several partitions.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example partitioned_join`

use std::error::Error;
use std::str::FromStr;
use std::sync::Arc;

use geo_types::Geometry;
use quadrant_predicates::{Contains, SpatialPredicate, SpatialRelate};
use quadrant_zones::{LeafZoneTable, Rectangle};
use wkt::Wkt;

const ROWS: usize = 200;

/// 8x8 zones of 26x26: zone edges fall on integer coordinates, so many points sit exactly on
/// zone borders.
const UNIVERSE: Rectangle = Rectangle::new(-8.0, -8.0, 200.0, 200.0);

fn point_rows(size: usize) -> Vec<(String, String)> {
    (0..size)
        .map(|i| (format!("POINT ({i} {i})"), format!("point{i}")))
        .collect()
}

fn polygon_rows(size: usize) -> Vec<(String, String)> {
    (0..size)
        .map(|i| {
            let (lo, hi) = (i as f64 - 0.5, i as f64 + 0.5);
            (
                format!("POLYGON (({lo} {lo}, {lo} {hi}, {hi} {hi}, {hi} {lo}, {lo} {lo}))"),
                format!("polygon{i}"),
            )
        })
        .collect()
}

fn parse_wkt(text: &str) -> Result<Geometry<f64>, Box<dyn Error>> {
    let wkt = Wkt::<f64>::from_str(text)?;
    Ok(Geometry::try_from(wkt)?)
}

type Row = (Geometry<f64>, Rectangle, String);

fn load(rows: &[(String, String)]) -> Result<Vec<Row>, Box<dyn Error>> {
    rows.iter()
        .map(|(text, name)| -> Result<Row, Box<dyn Error>> {
            let geom = parse_wkt(text)?;
            let env = geom
                .envelope()
                .ok_or_else(|| format!("{name} has no envelope"))?;
            Ok((geom, env, name.clone()))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let polygons = load(&polygon_rows(ROWS))?;
    let points = load(&point_rows(ROWS))?;

    let extent = polygons
        .iter()
        .chain(&points)
        .map(|(_, env, _)| *env)
        .reduce(|acc, env| acc.union(&env))
        .ok_or("no rows")?;
    assert!(UNIVERSE.contains_rect(&extent), "rows must fit the grid");
    let zones = Arc::new(LeafZoneTable::uniform(UNIVERSE, 8, 8)?);
    let st_contains = Contains::with_zones(zones.clone());

    let mut per_partition = 0;
    let mut deduplicated = Vec::new();
    for partition in 0..zones.len() {
        let zone = zones.zones()[partition];
        let left: Vec<_> = polygons.iter().filter(|(_, e, _)| zone.intersects(e)).collect();
        let right: Vec<_> = points.iter().filter(|(_, e, _)| zone.intersects(e)).collect();
        for (poly, _, poly_name) in &left {
            for (pt, _, pt_name) in &right {
                if st_contains.evaluate(poly, pt) {
                    per_partition += 1;
                }
                if st_contains.evaluate_in_partition(partition, poly, pt)? {
                    deduplicated.push((poly_name.clone(), pt_name.clone()));
                }
            }
        }
    }

    println!("matches without dedup: {per_partition}");
    println!("matches with dedup:    {}", deduplicated.len());
    assert_eq!(deduplicated.len(), ROWS, "every polygon should match once");
    deduplicated.sort();
    deduplicated.dedup();
    assert_eq!(deduplicated.len(), ROWS, "no pair may be reported twice");
    assert!(per_partition >= ROWS);
    Ok(())
}
