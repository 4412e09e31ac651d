// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`SpatialRelate`] for [`geo_types::Geometry<f64>`].
//!
//! ## Feature
//!
//! Enable with `geo` (on by default).
//!
//! ## Notes
//!
//! `covers` is read from the DE-9IM matrix, so a point on a polygon's boundary is covered
//! even though it is not strictly contained.

use geo::{BoundingRect, Intersects, Relate};
use geo_types::Geometry;
use quadrant_zones::Rectangle;

use crate::relate::SpatialRelate;

/// Convert a `geo` bounding rectangle.
pub fn rect_to_rectangle(rect: geo_types::Rect<f64>) -> Rectangle {
    let (min, max) = (rect.min(), rect.max());
    Rectangle::new(min.x, min.y, max.x, max.y)
}

impl SpatialRelate for Geometry<f64> {
    fn envelope(&self) -> Option<Rectangle> {
        self.bounding_rect().map(rect_to_rectangle)
    }

    fn intersects(&self, other: &Self) -> bool {
        Intersects::intersects(self, other)
    }

    fn covers(&self, other: &Self) -> bool {
        self.relate(other).is_covers()
    }
}
