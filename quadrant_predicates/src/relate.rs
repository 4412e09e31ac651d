// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The geometry-engine seam and the predicate kinds built on it.

use quadrant_zones::Rectangle;

/// The operations this crate needs from a geometry engine.
///
/// Implementations must be deterministic: the same pair always yields the same answer and
/// the same envelopes, no matter which worker asks.
pub trait SpatialRelate {
    /// The minimal axis-aligned rectangle around the geometry, or `None` if it is empty.
    fn envelope(&self) -> Option<Rectangle>;

    /// Whether the two geometries share at least one point.
    fn intersects(&self, other: &Self) -> bool;

    /// Whether no point of `other` lies outside `self`. Boundary points count.
    fn covers(&self, other: &Self) -> bool;
}

/// Which relation a predicate tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    /// `a` and `b` share at least one point.
    Intersects,
    /// `a` covers `b`.
    Contains,
}

impl PredicateKind {
    /// The function name a host engine registers this predicate under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intersects => "ST_Intersects",
            Self::Contains => "ST_Contains",
        }
    }

    /// Run the raw relation test, with no partition awareness.
    pub fn relate<G: SpatialRelate + ?Sized>(self, a: &G, b: &G) -> bool {
        match self {
            Self::Intersects => a.intersects(b),
            Self::Contains => a.covers(b),
        }
    }
}

impl core::fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
