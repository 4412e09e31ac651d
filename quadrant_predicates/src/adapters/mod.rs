// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters implementing [`SpatialRelate`](crate::SpatialRelate) for geometry engines.
//!
//! Enabled via feature flags so the core does not pull in a geometry engine.

#[cfg(feature = "geo")]
pub mod geo;
