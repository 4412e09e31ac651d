// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-open point ownership over a tiling of rectangles.
//!
//! Adjoining zones share edges. Low edges are always closed and high edges are open, except
//! where a high edge lies on the universe's outer boundary, which is closed so that points on
//! the extreme edge still have an owner. Under this rule every point of a gap-free tiling is
//! owned by exactly one zone.

use bitflags::bitflags;
use kurbo::Point;

use crate::types::{Rectangle, le, lt, max_f, min_f};

bitflags! {
    /// High edges of a zone that are treated as closed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ClosedEdges: u8 {
        /// `x == max_x` is owned (the zone touches the universe's right boundary).
        const MAX_X = 0b0000_0001;
        /// `y == max_y` is owned (the zone touches the universe's top boundary).
        const MAX_Y = 0b0000_0010;
    }
}

/// A zone with asymmetric edge inclusion.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalfOpenRegion {
    rect: Rectangle,
    universe: Rectangle,
    closed: ClosedEdges,
}

impl HalfOpenRegion {
    /// Build the region for `zone` within `universe`.
    ///
    /// A high edge of `zone` is closed when it coincides with the universe's.
    pub fn new(zone: Rectangle, universe: &Rectangle) -> Self {
        let mut closed = ClosedEdges::empty();
        if zone.max_x == universe.max_x {
            closed |= ClosedEdges::MAX_X;
        }
        if zone.max_y == universe.max_y {
            closed |= ClosedEdges::MAX_Y;
        }
        Self {
            rect: zone,
            universe: *universe,
            closed,
        }
    }

    /// The underlying rectangle.
    pub fn rect(&self) -> &Rectangle {
        &self.rect
    }

    /// The universe this region was built against.
    pub fn universe(&self) -> &Rectangle {
        &self.universe
    }

    /// Move `p` onto the nearest point of the universe.
    ///
    /// Points already inside are returned unchanged. NaN coordinates stay NaN.
    pub fn clamp_to_universe(&self, p: Point) -> Point {
        let u = &self.universe;
        if p.x.is_nan() || p.y.is_nan() {
            return p;
        }
        Point::new(
            min_f(max_f(p.x, u.min_x), u.max_x),
            min_f(max_f(p.y, u.min_y), u.max_y),
        )
    }

    /// Which high edges are closed.
    pub fn closed_edges(&self) -> ClosedEdges {
        self.closed
    }

    /// Whether this region owns `p`.
    ///
    /// NaN coordinates are owned by no region.
    #[inline]
    pub fn owns(&self, p: Point) -> bool {
        let r = &self.rect;
        le(r.min_x, p.x)
            && le(r.min_y, p.y)
            && upper(p.x, r.max_x, self.closed.contains(ClosedEdges::MAX_X))
            && upper(p.y, r.max_y, self.closed.contains(ClosedEdges::MAX_Y))
    }
}

#[inline]
fn upper(v: f64, max: f64, closed: bool) -> bool {
    if closed { le(v, max) } else { lt(v, max) }
}
