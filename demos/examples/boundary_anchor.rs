// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary anchor.
//!
//! A square straddling four zones and a point on their shared corner. Plain evaluation says
//! the pair intersects in every zone; partitioned evaluation reports it once, in the zone
//! that owns the corner. The table snapshot is printed as JSON, the form it would take when
//! shipped to workers.
//!
//! Run:
//! - `cargo run -p quadrant_demos --example boundary_anchor`

use std::sync::Arc;

use geo_types::{Geometry, Point, Rect, coord};
use kurbo::Point as KPoint;
use quadrant_predicates::{Intersects, SpatialPredicate};
use quadrant_zones::{LeafZoneTable, Rectangle};

fn main() {
    let zones = LeafZoneTable::uniform(Rectangle::new(0.0, 0.0, 10.0, 10.0), 2, 2).unwrap();
    println!("zones: {}", serde_json::to_string(&zones).unwrap());
    let zones = Arc::new(zones);

    let square: Geometry<f64> = Rect::new(coord! { x: 4.0, y: 4.0 }, coord! { x: 6.0, y: 6.0 })
        .to_polygon()
        .into();
    let corner: Geometry<f64> = Point::new(5.0, 5.0).into();

    let st_intersects = Intersects::with_zones(zones.clone());
    for partition in 0..zones.len() {
        let plain = st_intersects.evaluate(&square, &corner);
        let dedup = st_intersects
            .evaluate_in_partition(partition, &square, &corner)
            .unwrap();
        println!("partition {partition}: plain={plain} dedup={dedup}");
    }

    let owner = zones.owner_of(KPoint::new(5.0, 5.0));
    println!("corner owner: {owner:?}");
    assert_eq!(owner, Some(3), "the upper-right zone owns the shared corner");
}
