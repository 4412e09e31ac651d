// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: the axis-aligned [`Rectangle`] used for both leaf zones and
//! geometry envelopes.

use core::cmp::Ordering;

use kurbo::{Point, Rect};

/// Axis-aligned rectangle in 2D.
///
/// Used both for a partition's leaf zone and for a geometry's bounding envelope.
/// The plain constructor does not validate; use [`Rectangle::try_new`] or
/// [`Rectangle::is_well_formed`] where inputs are untrusted. Leaf-zone tables validate
/// every rectangle they are given.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Minimum x (left)
    pub min_x: f64,
    /// Minimum y (bottom)
    pub min_y: f64,
    /// Maximum x (right)
    pub max_x: f64,
    /// Maximum y (top)
    pub max_y: f64,
}

impl Rectangle {
    /// Create a new rectangle from min/max corners.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle, rejecting inverted or NaN extents.
    pub fn try_new(
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<Self, crate::ZoneError> {
        let rect = Self::new(min_x, min_y, max_x, max_y);
        if rect.is_well_formed() {
            Ok(rect)
        } else {
            Err(crate::ZoneError::MalformedRectangle {
                partition: None,
                rect,
            })
        }
    }

    /// Create a rectangle from origin and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// A degenerate rectangle covering exactly one point.
    pub const fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Convert a Kurbo rectangle, normalizing so that min <= max on both axes.
    pub fn from_kurbo(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }

    /// True when `min <= max` on both axes and no coordinate is NaN.
    pub fn is_well_formed(&self) -> bool {
        le(self.min_x, self.max_x) && le(self.min_y, self.max_y)
    }

    /// The lower-left corner `(min_x, min_y)`.
    pub const fn min_corner(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// The upper-right corner `(max_x, max_y)`.
    pub const fn max_corner(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether this rectangle contains the point, edges included.
    pub fn contains_point(&self, p: Point) -> bool {
        le(self.min_x, p.x) && le(self.min_y, p.y) && le(p.x, self.max_x) && le(p.y, self.max_y)
    }

    /// Whether `other` lies entirely inside this rectangle, edges included.
    pub fn contains_rect(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// Whether the two rectangles share at least one point. Touching edges count.
    pub fn intersects(&self, other: &Self) -> bool {
        le(self.min_x, other.max_x)
            && le(other.min_x, self.max_x)
            && le(self.min_y, other.max_y)
            && le(other.min_y, self.max_y)
    }

    /// Whether the two rectangles share interior area (positive-area overlap).
    pub fn overlaps_interior(&self, other: &Self) -> bool {
        lt(self.min_x, other.max_x)
            && lt(other.min_x, self.max_x)
            && lt(self.min_y, other.max_y)
            && lt(other.min_y, self.max_y)
    }

    /// The closed intersection of two rectangles, or `None` when they are disjoint.
    ///
    /// Rectangles that only touch produce a degenerate (zero-width or zero-height) result.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self {
            min_x: max_f(self.min_x, other.min_x),
            min_y: max_f(self.min_y, other.min_y),
            max_x: min_f(self.max_x, other.max_x),
            max_y: min_f(self.max_y, other.max_y),
        })
    }

    /// The smallest rectangle containing both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: min_f(self.min_x, other.min_x),
            min_y: min_f(self.min_y, other.min_y),
            max_x: max_f(self.max_x, other.max_x),
            max_y: max_f(self.max_y, other.max_y),
        }
    }
}

impl From<Rectangle> for Rect {
    fn from(r: Rectangle) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

impl From<Rect> for Rectangle {
    fn from(r: Rect) -> Self {
        Self::from_kurbo(r)
    }
}

pub(crate) fn min_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le(a: f64, b: f64) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt(a: f64, b: f64) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
