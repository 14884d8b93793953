use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error raised while building the lazy graph or inferring node shapes.
///
/// These indicate caller misuse (invalid operation attributes) and surface
/// immediately to the caller that recorded the operation; they are never
/// retried. The type is `Clone + PartialEq` so a node's memoized shape slot
/// can replay the same failure to every reader.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrError {
    /// Per-dimension attributes do not match the operand rank.
    #[error(
        "rank mismatch: operand has rank {rank}, got {base_indices} base indices and {sizes} sizes"
    )]
    RankMismatch {
        /// Rank of the operand tensor.
        rank: usize,
        /// Number of base indices provided.
        base_indices: usize,
        /// Number of sizes provided.
        sizes: usize,
    },
    /// A slice reaches past the end of a dimension.
    #[error("slice out of bounds on dim {dim}: base {base} + size {size} > extent {extent}")]
    SliceOutOfBounds {
        /// The offending dimension.
        dim: usize,
        /// Start offset along the dimension.
        base: usize,
        /// Requested extent along the dimension.
        size: usize,
        /// Actual extent of the operand along the dimension.
        extent: usize,
    },
    /// A node was rebound with the wrong number of operands.
    #[error("expected {expected} operands, got {actual}")]
    OperandCount {
        /// Operand count the node requires.
        expected: usize,
        /// Operand count provided.
        actual: usize,
    },
}
