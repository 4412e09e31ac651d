// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicate evaluators.
//!
//! ## Modes
//!
//! Every evaluator supports plain evaluation ([`SpatialPredicate::evaluate`]), which is just
//! the geometry engine's relation test. Evaluators built with a [`LeafZoneTable`] also
//! support partitioned evaluation ([`SpatialPredicate::evaluate_in_partition`]), which
//! reports a true match only in the partition that owns the pair's anchor point.
//!
//! An evaluator is bound to a table at construction or never. The table is held behind an
//! `Arc`, so clones are cheap and evaluators can be shared freely across worker threads.

use std::sync::Arc;

use quadrant_zones::{LeafZoneSource, LeafZoneTable, PartitionId};

use crate::error::{PredicateError, Result};
use crate::judge::reports_here;
use crate::relate::{PredicateKind, SpatialRelate};

/// Capability set shared by all predicates: plain and partitioned evaluation.
pub trait SpatialPredicate {
    /// The relation this predicate tests.
    const KIND: PredicateKind;

    /// The function name a host engine registers this predicate under.
    const NAME: &'static str = Self::KIND.name();

    /// The bound leaf-zone table, if any.
    fn zones(&self) -> Option<&LeafZoneTable>;

    /// Whether partitioned evaluation is available.
    fn is_zone_bound(&self) -> bool {
        self.zones().is_some()
    }

    /// Test the relation with no duplicate removal.
    fn evaluate<G: SpatialRelate + ?Sized>(&self, a: &G, b: &G) -> bool {
        Self::KIND.relate(a, b)
    }

    /// Test the relation inside `partition`, returning `true` only if this partition is the
    /// one that reports the match.
    ///
    /// Fails if the evaluator has no leaf-zone table or `partition` is outside it. A false
    /// relation short-circuits before the partition id is looked at.
    fn evaluate_in_partition<G: SpatialRelate + ?Sized>(
        &self,
        partition: PartitionId,
        a: &G,
        b: &G,
    ) -> Result<bool> {
        let Some(zones) = self.zones() else {
            tracing::warn!(predicate = Self::NAME, "partitioned call without zone table");
            return Err(PredicateError::UninitializedZoneTable {
                predicate: Self::NAME,
            });
        };
        if !Self::KIND.relate(a, b) {
            return Ok(false);
        }
        let region = zones.region(partition).inspect_err(|_| {
            tracing::warn!(
                predicate = Self::NAME,
                partition,
                zones = zones.len(),
                "partition id outside zone table"
            );
        })?;
        let (Some(env_a), Some(env_b)) = (a.envelope(), b.envelope()) else {
            return Err(PredicateError::MissingEnvelope {
                predicate: Self::NAME,
            });
        };
        let here = reports_here(Self::KIND, &env_a, &env_b, &region);
        if !here {
            tracing::trace!(predicate = Self::NAME, partition, "duplicate suppressed");
        }
        Ok(here)
    }
}

macro_rules! predicate {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default)]
        pub struct $name {
            zones: Option<Arc<LeafZoneTable>>,
        }

        impl $name {
            /// An evaluator for plain evaluation only.
            pub fn new() -> Self {
                Self { zones: None }
            }

            /// An evaluator bound to a leaf-zone table, usable in both modes.
            pub fn with_zones(zones: Arc<LeafZoneTable>) -> Self {
                Self { zones: Some(zones) }
            }

            /// Snapshot the partitioner's zones and bind to them.
            pub fn from_source<S: LeafZoneSource + ?Sized>(source: &S) -> Result<Self> {
                Ok(Self::with_zones(Arc::new(LeafZoneTable::from_source(source)?)))
            }
        }

        impl SpatialPredicate for $name {
            const KIND: PredicateKind = $kind;

            fn zones(&self) -> Option<&LeafZoneTable> {
                self.zones.as_deref()
            }
        }
    };
}

predicate!(
    /// `ST_Intersects`: the two geometries share at least one point.
    Intersects,
    PredicateKind::Intersects
);

predicate!(
    /// `ST_Contains`: the first geometry covers the second (boundary points count).
    Contains,
    PredicateKind::Contains
);
