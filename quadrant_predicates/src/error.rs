// Copyright 2025 the Quadrant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for predicate evaluation.

use quadrant_zones::{PartitionId, ZoneError};
use thiserror::Error;

/// Errors raised by dedup-mode evaluation.
///
/// All of them indicate a caller or configuration mistake. None is ever downgraded to plain
/// evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredicateError {
    /// A partition-aware call on an evaluator built without a leaf-zone table.
    #[error("{predicate} has to be initialized with a leaf-zone table for partitioned evaluation")]
    UninitializedZoneTable {
        /// Name of the predicate.
        predicate: &'static str,
    },

    /// The partition id does not index the bound leaf-zone table.
    #[error("partition {partition} out of range for a table of {len} zones")]
    PartitionOutOfRange {
        /// Requested partition id.
        partition: PartitionId,
        /// Number of zones in the bound table.
        len: usize,
    },

    /// The geometry engine reported a relation between geometries that have no envelope.
    #[error("{predicate} matched a geometry without an envelope")]
    MissingEnvelope {
        /// Name of the predicate.
        predicate: &'static str,
    },

    /// Any other leaf-zone failure.
    #[error(transparent)]
    Zone(ZoneError),
}

impl From<ZoneError> for PredicateError {
    fn from(err: ZoneError) -> Self {
        match err {
            ZoneError::PartitionOutOfRange { partition, len } => {
                Self::PartitionOutOfRange { partition, len }
            }
            other => Self::Zone(other),
        }
    }
}

/// Result type for predicate evaluation.
pub type Result<T> = std::result::Result<T, PredicateError>;
