// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-point duplicate avoidance.
//!
//! ## Overview
//!
//! A matching pair is replicated to every zone both envelopes touch. To report it once, the
//! pair is reduced to a single anchor point computed from the envelopes alone, and only the
//! zone that owns the anchor (per [`HalfOpenRegion::owns`]) reports it.
//!
//! ## Anchors
//!
//! - [`PredicateKind::Intersects`]: the minimum corner of the intersection of the two
//!   envelopes. It lies in both envelopes, so its owner received both geometries.
//! - [`PredicateKind::Contains`]: the minimum corner of the contained geometry's envelope.
//!   A true containment puts that envelope inside the container's, so the same holds.
//!
//! Point geometries have degenerate envelopes; the anchor is then the point itself.
//!
//! Envelopes may reach past the universe's low edges, where no zone owns anything. The anchor
//! is clamped onto the universe before the ownership test. The clamped point still lies in
//! both envelopes whenever some zone received the pair, so its owner is one of the receivers.

use kurbo::Point;
use quadrant_zones::{HalfOpenRegion, Rectangle};

use crate::relate::PredicateKind;

/// The anchor point for a pair with envelopes `a` and `b`.
///
/// Returns `None` only for [`PredicateKind::Intersects`] when the envelopes are disjoint, in
/// which case the geometries cannot intersect either.
pub fn anchor_point(kind: PredicateKind, a: &Rectangle, b: &Rectangle) -> Option<Point> {
    match kind {
        PredicateKind::Intersects => a.intersection(b).map(|i| i.min_corner()),
        PredicateKind::Contains => Some(b.min_corner()),
    }
}

/// Whether the zone behind `region` is the one that reports this pair.
///
/// Assumes the relation already holds; the verdict depends only on the envelopes and the
/// region, never on how often or where else it is asked.
pub fn reports_here(
    kind: PredicateKind,
    a: &Rectangle,
    b: &Rectangle,
    region: &HalfOpenRegion,
) -> bool {
    anchor_point(kind, a, b)
        .map(|p| region.clamp_to_universe(p))
        .is_some_and(|p| region.owns(p))
}
