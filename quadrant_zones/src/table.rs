// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The leaf-zone table: an immutable, validated list of zones indexed by partition id.

use alloc::vec::Vec;

use kurbo::Point;

use crate::error::{Result, ZoneError};
use crate::region::HalfOpenRegion;
use crate::source::LeafZoneSource;
use crate::types::Rectangle;

/// Index of a zone in a [`LeafZoneTable`].
pub type PartitionId = usize;

/// How the universe rectangle of a table is determined.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UniverseBounds {
    /// The union of all zones.
    #[default]
    Union,
    /// A fixed rectangle that must contain every zone.
    Explicit(Rectangle),
}

/// Construction options for [`LeafZoneTable::with_options`].
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneTableOptions {
    /// Source of the universe rectangle. Default: [`UniverseBounds::Union`].
    pub universe: UniverseBounds,
    /// Fail construction if two zones share interior area. Default: `false`.
    ///
    /// The check is quadratic in the zone count.
    pub reject_overlaps: bool,
}

impl ZoneTableOptions {
    /// Use a fixed universe instead of the union of the zones.
    pub fn with_universe(mut self, universe: Rectangle) -> Self {
        self.universe = UniverseBounds::Explicit(universe);
        self
    }

    /// Enable or disable the overlap check.
    pub fn with_reject_overlaps(mut self, reject: bool) -> Self {
        self.reject_overlaps = reject;
        self
    }
}

/// Ordered leaf zones for one join pass, plus the universe they tile.
///
/// Built once from the partitioner's output and shared read-only (typically behind an
/// `Arc`) by every worker. There is no way to mutate a table after construction.
///
/// Deserialized snapshots go through the same validation as [`LeafZoneTable::with_options`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLeafZoneTable"))]
pub struct LeafZoneTable {
    zones: Vec<Rectangle>,
    universe: Rectangle,
}

/// Unchecked wire form of a [`LeafZoneTable`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLeafZoneTable {
    zones: Vec<Rectangle>,
    universe: Rectangle,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLeafZoneTable> for LeafZoneTable {
    type Error = ZoneError;

    fn try_from(raw: RawLeafZoneTable) -> Result<Self> {
        Self::with_options(
            raw.zones,
            ZoneTableOptions::default().with_universe(raw.universe),
        )
    }
}

impl LeafZoneTable {
    /// Build a table from zones, deriving the universe as their union.
    pub fn new(zones: Vec<Rectangle>) -> Result<Self> {
        Self::with_options(zones, ZoneTableOptions::default())
    }

    /// Build a table from zones with explicit options.
    pub fn with_options(zones: Vec<Rectangle>, options: ZoneTableOptions) -> Result<Self> {
        if zones.is_empty() {
            return Err(ZoneError::EmptyTable);
        }
        for (partition, rect) in zones.iter().enumerate() {
            if !rect.is_well_formed() {
                return Err(ZoneError::MalformedRectangle {
                    partition: Some(partition),
                    rect: *rect,
                });
            }
        }

        let universe = match options.universe {
            UniverseBounds::Union => zones[1..].iter().fold(zones[0], |acc, r| acc.union(r)),
            UniverseBounds::Explicit(universe) => {
                if !universe.is_well_formed() {
                    return Err(ZoneError::MalformedRectangle {
                        partition: None,
                        rect: universe,
                    });
                }
                if let Some(partition) = zones.iter().position(|z| !universe.contains_rect(z)) {
                    return Err(ZoneError::ZoneOutsideUniverse { partition });
                }
                universe
            }
        };

        if options.reject_overlaps {
            for (first, a) in zones.iter().enumerate() {
                for (offset, b) in zones[first + 1..].iter().enumerate() {
                    if a.overlaps_interior(b) {
                        return Err(ZoneError::OverlappingZones {
                            first,
                            second: first + 1 + offset,
                        });
                    }
                }
            }
        }

        tracing::debug!(
            zones = zones.len(),
            min_x = universe.min_x,
            min_y = universe.min_y,
            max_x = universe.max_x,
            max_y = universe.max_y,
            "built leaf-zone table"
        );

        Ok(Self { zones, universe })
    }

    /// Snapshot the partitioner's zones. `fetch_leaf_zones` is called exactly once.
    pub fn from_source<S: LeafZoneSource + ?Sized>(source: &S) -> Result<Self> {
        Self::new(source.fetch_leaf_zones())
    }

    /// A row-major grid of `columns * rows` equal zones tiling `universe`.
    ///
    /// Partition `id` covers column `id % columns` and row `id / columns`. The outermost
    /// edges are set to the universe's exact bounds so no rounding gap appears.
    pub fn uniform(universe: Rectangle, columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(ZoneError::InvalidGrid { columns, rows });
        }
        if !universe.is_well_formed() {
            return Err(ZoneError::MalformedRectangle {
                partition: None,
                rect: universe,
            });
        }
        let edge = |lo: f64, hi: f64, i: usize, n: usize| {
            if i == n {
                hi
            } else {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "Grid dimensions are far below 2^52."
                )]
                let t = i as f64 / n as f64;
                lo + (hi - lo) * t
            }
        };
        let mut zones = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                zones.push(Rectangle::new(
                    edge(universe.min_x, universe.max_x, col, columns),
                    edge(universe.min_y, universe.max_y, row, rows),
                    edge(universe.min_x, universe.max_x, col + 1, columns),
                    edge(universe.min_y, universe.max_y, row + 1, rows),
                ));
            }
        }
        Self::with_options(zones, ZoneTableOptions::default().with_universe(universe))
    }

    /// Number of zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// The universe the zones tile.
    pub fn universe(&self) -> &Rectangle {
        &self.universe
    }

    /// All zones in partition order.
    pub fn zones(&self) -> &[Rectangle] {
        &self.zones
    }

    /// Iterate `(partition, zone)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PartitionId, &Rectangle)> + '_ {
        self.zones.iter().enumerate()
    }

    /// The zone for `partition`, if any.
    pub fn get(&self, partition: PartitionId) -> Option<&Rectangle> {
        self.zones.get(partition)
    }

    /// The zone for `partition`, or an out-of-range error.
    pub fn zone(&self, partition: PartitionId) -> Result<&Rectangle> {
        self.zones
            .get(partition)
            .ok_or(ZoneError::PartitionOutOfRange {
                partition,
                len: self.zones.len(),
            })
    }

    /// The half-open ownership region for `partition`.
    pub fn region(&self, partition: PartitionId) -> Result<HalfOpenRegion> {
        self.zone(partition)
            .map(|z| HalfOpenRegion::new(*z, &self.universe))
    }

    /// The first zone that owns `p`, if any.
    ///
    /// For a gap-free, non-overlapping tiling this is the unique owner of every point in the
    /// universe.
    pub fn owner_of(&self, p: Point) -> Option<PartitionId> {
        self.zones
            .iter()
            .position(|z| HalfOpenRegion::new(*z, &self.universe).owns(p))
    }

    /// Partitions whose zone touches `envelope`, edges included.
    ///
    /// This is the replication rule for dispatching a geometry: every zone its envelope
    /// touches receives a copy, so the zone owning any reference point inside the
    /// envelope is always among them.
    pub fn overlapping<'a>(
        &'a self,
        envelope: &'a Rectangle,
    ) -> impl Iterator<Item = PartitionId> + 'a {
        self.zones
            .iter()
            .enumerate()
            .filter(move |(_, z)| z.intersects(envelope))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rand::{Rng, SeedableRng};

    fn quad() -> LeafZoneTable {
        LeafZoneTable::uniform(Rectangle::new(0.0, 0.0, 10.0, 10.0), 2, 2).unwrap()
    }

    #[test]
    fn uniform_grid_is_row_major() {
        let t = quad();
        assert_eq!(t.len(), 4);
        assert_eq!(t.zone(0).unwrap(), &Rectangle::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(t.zone(1).unwrap(), &Rectangle::new(5.0, 0.0, 10.0, 5.0));
        assert_eq!(t.zone(2).unwrap(), &Rectangle::new(0.0, 5.0, 5.0, 10.0));
        assert_eq!(t.zone(3).unwrap(), &Rectangle::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(t.universe(), &Rectangle::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert_eq!(LeafZoneTable::new(vec![]), Err(ZoneError::EmptyTable));
        let bad = Rectangle::new(3.0, 0.0, 1.0, 1.0);
        assert_eq!(
            LeafZoneTable::new(vec![Rectangle::new(0.0, 0.0, 1.0, 1.0), bad]),
            Err(ZoneError::MalformedRectangle {
                partition: Some(1),
                rect: bad
            })
        );
        assert_eq!(
            LeafZoneTable::uniform(Rectangle::new(0.0, 0.0, 1.0, 1.0), 0, 3),
            Err(ZoneError::InvalidGrid {
                columns: 0,
                rows: 3
            })
        );
    }

    #[test]
    fn out_of_range_lookup_is_an_error() {
        let t = quad();
        assert_eq!(
            t.zone(4),
            Err(ZoneError::PartitionOutOfRange {
                partition: 4,
                len: 4
            })
        );
        assert!(t.get(4).is_none());
        assert!(t.region(7).is_err());
    }

    #[test]
    fn explicit_universe_must_contain_zones() {
        let zones = vec![
            Rectangle::new(0.0, 0.0, 5.0, 5.0),
            Rectangle::new(5.0, 0.0, 12.0, 5.0),
        ];
        let opts = ZoneTableOptions::default().with_universe(Rectangle::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            LeafZoneTable::with_options(zones, opts),
            Err(ZoneError::ZoneOutsideUniverse { partition: 1 })
        );
    }

    #[test]
    fn explicit_universe_controls_closed_edges() {
        // The zones stop short of the universe, so their high edges stay open.
        let zones = vec![Rectangle::new(0.0, 0.0, 5.0, 5.0)];
        let opts = ZoneTableOptions::default().with_universe(Rectangle::new(0.0, 0.0, 10.0, 10.0));
        let t = LeafZoneTable::with_options(zones, opts).unwrap();
        assert_eq!(t.owner_of(Point::new(5.0, 5.0)), None);
        assert_eq!(t.owner_of(Point::new(4.9, 4.9)), Some(0));
    }

    #[test]
    fn overlap_check_is_opt_in() {
        let zones = vec![
            Rectangle::new(0.0, 0.0, 6.0, 5.0),
            Rectangle::new(5.0, 0.0, 10.0, 5.0),
        ];
        assert!(LeafZoneTable::new(zones.clone()).is_ok());
        let opts = ZoneTableOptions::default().with_reject_overlaps(true);
        assert_eq!(
            LeafZoneTable::with_options(zones, opts),
            Err(ZoneError::OverlappingZones {
                first: 0,
                second: 1
            })
        );
        // Shared edges are not overlaps.
        let opts = ZoneTableOptions::default().with_reject_overlaps(true);
        assert!(LeafZoneTable::with_options(quad().zones().to_vec(), opts).is_ok());
    }

    #[test]
    fn from_source_snapshots_zones() {
        let zones = [
            Rectangle::new(0.0, 0.0, 5.0, 10.0),
            Rectangle::new(5.0, 0.0, 10.0, 10.0),
        ];
        let t = LeafZoneTable::from_source(&zones).unwrap();
        assert_eq!(t.zones(), &zones);
        assert_eq!(t.universe(), &Rectangle::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn overlapping_includes_touching_zones() {
        let t = quad();
        let env = Rectangle::new(4.0, 4.0, 6.0, 6.0);
        let hits: Vec<_> = t.overlapping(&env).collect();
        assert_eq!(hits, vec![0, 1, 2, 3]);

        let edge = Rectangle::new(1.0, 1.0, 5.0, 2.0);
        let hits: Vec<_> = t.overlapping(&edge).collect();
        assert_eq!(hits, vec![0, 1]);

        let inside = Rectangle::new(0.0, 0.0, 3.0, 3.0);
        let hits: Vec<_> = t.overlapping(&inside).collect();
        assert_eq!(hits, vec![0]);
    }

    #[test]
    fn every_point_in_the_universe_has_exactly_one_owner() {
        let t = LeafZoneTable::uniform(Rectangle::new(-50.0, 0.0, 50.0, 30.0), 7, 3).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let xs: Vec<f64> = t
            .zones()
            .iter()
            .flat_map(|z| [z.min_x, z.max_x])
            .collect();
        let ys: Vec<f64> = t
            .zones()
            .iter()
            .flat_map(|z| [z.min_y, z.max_y])
            .collect();

        let mut points = Vec::new();
        // Every grid line crossing, including the outer boundary.
        for &x in &xs {
            for &y in &ys {
                points.push(Point::new(x, y));
            }
        }
        for _ in 0..2000 {
            points.push(Point::new(
                rng.random_range(-50.0..=50.0),
                rng.random_range(0.0..=30.0),
            ));
        }
        // Random points snapped onto zone edges.
        for _ in 0..500 {
            let x = xs[rng.random_range(0..xs.len())];
            points.push(Point::new(x, rng.random_range(0.0..=30.0)));
            let y = ys[rng.random_range(0..ys.len())];
            points.push(Point::new(rng.random_range(-50.0..=50.0), y));
        }

        for p in points {
            let owners = (0..t.len())
                .filter(|&i| t.region(i).unwrap().owns(p))
                .count();
            assert_eq!(owners, 1, "point {p:?} has {owners} owners");
            assert!(t.owner_of(p).is_some());
        }
    }

    #[test]
    fn irregular_tiling_has_unique_owners() {
        // A non-grid tiling: one tall zone on the left, two stacked on the right.
        let t = LeafZoneTable::new(vec![
            Rectangle::new(0.0, 0.0, 4.0, 10.0),
            Rectangle::new(4.0, 0.0, 10.0, 3.0),
            Rectangle::new(4.0, 3.0, 10.0, 10.0),
        ])
        .unwrap();
        assert_eq!(t.owner_of(Point::new(4.0, 3.0)), Some(2));
        assert_eq!(t.owner_of(Point::new(4.0, 0.0)), Some(1));
        assert_eq!(t.owner_of(Point::new(3.9, 3.0)), Some(0));
        assert_eq!(t.owner_of(Point::new(10.0, 3.0)), Some(2));
        assert_eq!(t.owner_of(Point::new(0.0, 10.0)), Some(0));
        assert_eq!(t.owner_of(Point::new(10.0, 10.0)), Some(2));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn table_snapshot_round_trips_through_json() {
        let t = quad();
        let json = serde_json::to_string(&t).unwrap();
        let back: LeafZoneTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_snapshots_are_rejected() {
        let empty = r#"{"zones":[],"universe":{"min_x":0.0,"min_y":0.0,"max_x":1.0,"max_y":1.0}}"#;
        let malformed = r#"{"zones":[{"min_x":5.0,"min_y":0.0,"max_x":0.0,"max_y":1.0}],
            "universe":{"min_x":0.0,"min_y":0.0,"max_x":10.0,"max_y":10.0}}"#;
        let outside = r#"{"zones":[{"min_x":0.0,"min_y":0.0,"max_x":20.0,"max_y":20.0}],
            "universe":{"min_x":0.0,"min_y":0.0,"max_x":1.0,"max_y":1.0}}"#;
        for json in [empty, malformed, outside] {
            let err = serde_json::from_str::<LeafZoneTable>(json);
            assert!(err.is_err(), "accepted {json}");
        }

        let msg = serde_json::from_str::<LeafZoneTable>(outside)
            .unwrap_err()
            .to_string();
        assert!(msg.contains("outside the configured universe"), "{msg}");
    }
}
