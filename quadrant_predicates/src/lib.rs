// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant Predicates: duplicate-free spatial predicates for partitioned joins.
//!
//! ## Overview
//!
//! A host engine partitions both sides of a spatial join by a grid of leaf zones and
//! replicates each geometry to every zone its envelope touches. A matching pair can then be
//! rediscovered by several workers. The evaluators here make each match count exactly once:
//!
//! - [`Intersects`] and [`Contains`] evaluate the raw relation through the geometry engine
//!   ([`SpatialRelate`]) in plain mode.
//! - Bound to a [`LeafZoneTable`], they also evaluate inside a partition, reporting a true
//!   match only where the pair's anchor point is owned (see [`judge`]).
//!
//! The decision depends only on the pair and the partition, so it is safe to call from any
//! number of threads, in any order, and to repeat when a task is retried.
//!
//! ## Geometry engines
//!
//! The `geo` feature (default) implements [`SpatialRelate`] for `geo_types::Geometry<f64>`.
//! Other engines plug in by implementing the trait.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use geo_types::{Geometry, Point, Rect, coord};
//! use quadrant_predicates::{Intersects, SpatialPredicate};
//! use quadrant_zones::{LeafZoneTable, Rectangle};
//!
//! let zones = LeafZoneTable::uniform(Rectangle::new(0.0, 0.0, 10.0, 10.0), 2, 2).unwrap();
//! let st_intersects = Intersects::with_zones(Arc::new(zones));
//!
//! // A square straddling all four zones and a point on their shared corner.
//! let square: Geometry<f64> =
//!     Rect::new(coord! { x: 4.0, y: 4.0 }, coord! { x: 6.0, y: 6.0 }).to_polygon().into();
//! let corner: Geometry<f64> = Point::new(5.0, 5.0).into();
//!
//! assert!(st_intersects.evaluate(&square, &corner));
//!
//! let reporters: Vec<usize> = (0..4)
//!     .filter(|&p| st_intersects.evaluate_in_partition(p, &square, &corner).unwrap())
//!     .collect();
//! assert_eq!(reporters, vec![3]);
//! ```

pub mod adapters;
pub mod error;
pub mod judge;
pub mod predicate;
pub mod relate;

pub use error::{PredicateError, Result};
pub use predicate::{Contains, Intersects, SpatialPredicate};
pub use relate::{PredicateKind, SpatialRelate};

pub use quadrant_zones::{LeafZoneTable, PartitionId, Rectangle};
