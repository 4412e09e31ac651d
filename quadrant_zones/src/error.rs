// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for leaf-zone construction and lookup.

use thiserror::Error;

use crate::table::PartitionId;
use crate::types::Rectangle;

/// Leaf-zone errors.
///
/// Everything here surfaces at a boundary: table construction or partition lookup.
/// Point ownership itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoneError {
    /// A rectangle with `min > max` on some axis, or a NaN coordinate.
    #[error("malformed rectangle {rect:?} (partition {partition:?})")]
    MalformedRectangle {
        /// Index of the offending zone, when it came from a table.
        partition: Option<PartitionId>,
        /// The rejected rectangle.
        rect: Rectangle,
    },

    /// The partitioner returned no zones.
    #[error("leaf-zone table is empty")]
    EmptyTable,

    /// A partition id past the end of the table.
    #[error("partition {partition} out of range for a table of {len} zones")]
    PartitionOutOfRange {
        /// Requested partition id.
        partition: PartitionId,
        /// Number of zones in the table.
        len: usize,
    },

    /// A zone extends past an explicitly configured universe.
    #[error("zone {partition} lies outside the configured universe")]
    ZoneOutsideUniverse {
        /// Index of the offending zone.
        partition: PartitionId,
    },

    /// Two zones share interior area while overlaps are rejected.
    #[error("zones {first} and {second} overlap")]
    OverlappingZones {
        /// Lower partition id of the pair.
        first: PartitionId,
        /// Higher partition id of the pair.
        second: PartitionId,
    },

    /// A uniform grid was requested with zero columns or rows.
    #[error("invalid grid of {columns}x{rows} zones")]
    InvalidGrid {
        /// Requested column count.
        columns: usize,
        /// Requested row count.
        rows: usize,
    },
}

/// Result type for leaf-zone operations.
pub type Result<T> = core::result::Result<T, ZoneError>;
