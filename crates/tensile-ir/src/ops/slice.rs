use core::any::Any;
use core::fmt;
use std::sync::Arc;

use tensile_std::Shape;

use crate::node::{join, same_operands};
use crate::{IrError, Node, NodeRef, NodeState, OpKind, infer};

/// Lazy slice node: a rectangular sub-view of a single operand.
///
/// `base_indices` holds the start offset per dimension and `sizes` the
/// extent. Both are recorded by value at construction and folded into the
/// structural hash; the output shape is inferred on first demand, so
/// recording a slice never forces the operand's shape.
#[derive(Debug)]
pub struct SliceIr {
    state: NodeState,
    base_indices: Vec<usize>,
    sizes: Vec<usize>,
}

impl SliceIr {
    /// Creates a slice of `input` starting at `base_indices` with the given
    /// `sizes`.
    ///
    /// The attributes are not validated here; inconsistent attributes
    /// surface as an [`IrError`] on the first [`shape`](Node::shape) access.
    pub fn new(input: NodeRef, base_indices: Vec<usize>, sizes: Vec<usize>) -> Self {
        let state = NodeState::new(OpKind::Slice, vec![input], 1, &(&base_indices, &sizes));

        Self {
            state,
            base_indices,
            sizes,
        }
    }

    /// Creates a slice node and wraps it as a [`NodeRef`].
    pub fn create(input: NodeRef, base_indices: Vec<usize>, sizes: Vec<usize>) -> NodeRef {
        Arc::new(Self::new(input, base_indices, sizes))
    }

    /// Start offset per dimension.
    pub fn base_indices(&self) -> &[usize] {
        &self.base_indices
    }

    /// Extent per dimension.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }
}

impl fmt::Display for SliceIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, base_indices=({}), sizes=({})",
            self.state,
            join(&self.base_indices),
            join(&self.sizes)
        )
    }
}

impl Node for SliceIr {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn infer_shape(&self) -> Result<Shape, IrError> {
        let input = self.operands()[0].shape()?;
        infer::slice(&input, &self.base_indices, &self.sizes)
    }

    fn clone_with(&self, operands: &[NodeRef]) -> Result<NodeRef, IrError> {
        let [input] = operands else {
            return Err(IrError::OperandCount {
                expected: 1,
                actual: operands.len(),
            });
        };

        Ok(Self::create(
            input.clone(),
            self.base_indices.clone(),
            self.sizes.clone(),
        ))
    }

    fn same_structure(&self, other: &dyn Node) -> bool {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => {
                self.base_indices == other.base_indices
                    && self.sizes == other.sizes
                    && same_operands(self.operands(), other.operands())
            }
            None => false,
        }
    }
}
