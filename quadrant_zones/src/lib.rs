// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant Zones: leaf-zone tables with half-open point ownership.
//!
//! When a spatial join is partitioned by a grid, each worker owns one rectangular leaf zone.
//! A geometry is replicated to every zone its envelope touches, so the same matching pair can
//! be seen by several workers. This crate provides the pieces needed to pick exactly one of
//! them:
//!
//! - [`Rectangle`]: an axis-aligned rectangle, used for zones and geometry envelopes.
//! - [`HalfOpenRegion`]: point ownership with closed low edges and open high edges, except on
//!   the universe's outer boundary. Every point of a gap-free tiling has exactly one owner.
//! - [`LeafZoneTable`]: the validated, immutable list of zones for one join pass, indexed by
//!   [`PartitionId`], built from a [`LeafZoneSource`] (the partitioner) exactly once.
//!
//! Points are [`kurbo::Point`]; rectangles convert to and from [`kurbo::Rect`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use quadrant_zones::{LeafZoneTable, Rectangle};
//!
//! // Four 5x5 zones tiling [0, 10] x [0, 10].
//! let table = LeafZoneTable::uniform(Rectangle::new(0.0, 0.0, 10.0, 10.0), 2, 2).unwrap();
//!
//! // The shared corner belongs to exactly one zone.
//! let corner = Point::new(5.0, 5.0);
//! let owners: Vec<_> = (0..table.len())
//!     .filter(|&p| table.region(p).unwrap().owns(corner))
//!     .collect();
//! assert_eq!(owners, vec![3]);
//!
//! // Points on the outer boundary are not dropped.
//! assert_eq!(table.owner_of(Point::new(10.0, 10.0)), Some(3));
//! assert_eq!(table.owner_of(Point::new(0.0, 0.0)), Some(0));
//! ```
//!
//! ## Float semantics
//!
//! Coordinates are `f64`. NaN coordinates are never owned and rectangles containing NaN are
//! rejected when a table is built.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod region;
pub mod source;
pub mod table;
pub mod types;

pub use error::{Result, ZoneError};
pub use region::{ClosedEdges, HalfOpenRegion};
pub use source::LeafZoneSource;
pub use table::{LeafZoneTable, PartitionId, UniverseBounds, ZoneTableOptions};
pub use types::Rectangle;
