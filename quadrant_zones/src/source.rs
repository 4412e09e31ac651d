// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The partitioner seam.

use alloc::vec::Vec;

use crate::types::Rectangle;

/// Anything that can hand back the ordered list of leaf zones for one query.
///
/// The order must stay stable for the whole join: partition ids used when dispatching
/// pairs are indices into this list.
pub trait LeafZoneSource {
    /// Return the leaf zones, one per partition id.
    fn fetch_leaf_zones(&self) -> Vec<Rectangle>;
}

impl LeafZoneSource for [Rectangle] {
    fn fetch_leaf_zones(&self) -> Vec<Rectangle> {
        self.to_vec()
    }
}

impl LeafZoneSource for Vec<Rectangle> {
    fn fetch_leaf_zones(&self) -> Vec<Rectangle> {
        self.clone()
    }
}

impl<const N: usize> LeafZoneSource for [Rectangle; N] {
    fn fetch_leaf_zones(&self) -> Vec<Rectangle> {
        self.to_vec()
    }
}
