use core::any::Any;
use core::fmt;
use std::sync::Arc;

use tensile_std::Shape;

use crate::{IrError, Node, NodeRef, NodeState, OpKind};

/// Leaf node with an eagerly known shape: the entry point of a lazy graph,
/// standing in for device data or parameters fed into the program.
#[derive(Debug)]
pub struct InputIr {
    state: NodeState,
    shape: Shape,
}

impl InputIr {
    /// Creates an input node for a tensor of the given shape.
    pub fn new(shape: Shape) -> Self {
        Self {
            state: NodeState::new(OpKind::Input, Vec::new(), 1, &shape.dims),
            shape,
        }
    }

    /// Creates an input node and wraps it as a [`NodeRef`].
    pub fn create(shape: Shape) -> NodeRef {
        Arc::new(Self::new(shape))
    }
}

impl fmt::Display for InputIr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, shape={:?}", self.state, self.shape.dims)
    }
}

impl Node for InputIr {
    fn state(&self) -> &NodeState {
        &self.state
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn infer_shape(&self) -> Result<Shape, IrError> {
        Ok(self.shape.clone())
    }

    fn clone_with(&self, operands: &[NodeRef]) -> Result<NodeRef, IrError> {
        if !operands.is_empty() {
            return Err(IrError::OperandCount {
                expected: 0,
                actual: operands.len(),
            });
        }

        Ok(Self::create(self.shape.clone()))
    }

    fn same_structure(&self, _other: &dyn Node) -> bool {
        // Inputs stand for distinct external tensors; two instances are
        // never merged even when their shapes coincide.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_its_shape() {
        let input = InputIr::create(Shape::new([8, 8]));
        assert_eq!(input.shape(), Ok(Shape::new([8, 8])));
        assert_eq!(input.op(), OpKind::Input);
        assert!(input.operands().is_empty());
    }

    #[test]
    fn should_reject_operands_on_rebind() {
        let input = InputIr::new(Shape::new([4]));
        let other = InputIr::create(Shape::new([4]));
        let result = input.clone_with(&[other]);

        assert_eq!(
            result.err(),
            Some(IrError::OperandCount {
                expected: 0,
                actual: 1,
            })
        );
    }

    #[test]
    fn should_never_merge_inputs() {
        let lhs = InputIr::new(Shape::new([4]));
        let rhs = InputIr::new(Shape::new([4]));

        assert_eq!(lhs.structural_hash(), rhs.structural_hash());
        assert!(!lhs.same_structure(&rhs));
    }
}
