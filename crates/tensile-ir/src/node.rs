use core::any::Any;
use core::fmt;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tensile_std::Shape;

use crate::IrError;

/// The kind of operation a node performs.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    /// Graph entry point with an eagerly known shape.
    Input,
    /// Rectangular sub-view of a single operand.
    Slice,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpKind::Input => "input",
            OpKind::Slice => "slice",
        })
    }
}

/// Reference-counted handle to a lazy IR node.
pub type NodeRef = Arc<dyn Node>;

/// State shared by every node kind: the operation tag, operand bindings,
/// structural hash, and the memoized output shape.
#[derive(Debug)]
pub struct NodeState {
    op: OpKind,
    operands: Vec<NodeRef>,
    num_outputs: usize,
    hash: u64,
    shape: OnceLock<Result<Shape, IrError>>,
}

impl NodeState {
    /// Creates the shared state, hashing the operation kind together with
    /// the node attributes for deduplication.
    pub fn new<A: Hash>(op: OpKind, operands: Vec<NodeRef>, num_outputs: usize, attrs: &A) -> Self {
        let mut hasher = DefaultHasher::new();
        op.hash(&mut hasher);
        attrs.hash(&mut hasher);

        Self {
            op,
            operands,
            num_outputs,
            hash: hasher.finish(),
            shape: OnceLock::new(),
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, num_outputs={}", self.op, self.num_outputs)
    }
}

/// A node in the lazy computation graph.
///
/// Nodes are immutable after construction. The output shape is computed on
/// first access to [`shape`](Node::shape) and memoized; concurrent readers
/// observe a single computation. Rebinding a node to different operands goes
/// through [`clone_with`](Node::clone_with), which produces a fresh node
/// sharing no state (in particular, no cached shape) with the original.
pub trait Node: fmt::Debug + fmt::Display + Send + Sync {
    /// The state shared by all node kinds.
    fn state(&self) -> &NodeState;

    /// Upcast used for structural comparison across node kinds.
    fn as_any(&self) -> &dyn Any;

    /// Computes the output shape of the node.
    ///
    /// Called at most once per node, on the first [`shape`](Node::shape)
    /// access; validation of attributes against operand shapes happens here
    /// rather than at construction.
    fn infer_shape(&self) -> Result<Shape, IrError>;

    /// Returns a new node with the same attributes bound to the replacement
    /// operands, for graph-copying and rewriting passes.
    ///
    /// Fails when the operand count does not match the node's arity.
    fn clone_with(&self, operands: &[NodeRef]) -> Result<NodeRef, IrError>;

    /// Whether `other` performs the same operation with the same attributes
    /// on the same operand bindings.
    ///
    /// Equal structural hashes are necessary but not sufficient; this is the
    /// collision check used when merging nodes.
    fn same_structure(&self, other: &dyn Node) -> bool;

    /// The operation kind.
    fn op(&self) -> OpKind {
        self.state().op
    }

    /// The operand bindings.
    fn operands(&self) -> &[NodeRef] {
        &self.state().operands
    }

    /// The number of outputs the node produces.
    fn num_outputs(&self) -> usize {
        self.state().num_outputs
    }

    /// Hash over the operation kind and attributes, used to merge
    /// equivalent subexpressions.
    fn structural_hash(&self) -> u64 {
        self.state().hash
    }

    /// The output shape, inferred on first access and memoized.
    ///
    /// Invalid attributes surface here as an [`IrError`]; the same result is
    /// returned to every subsequent caller.
    fn shape(&self) -> Result<Shape, IrError> {
        self.state()
            .shape
            .get_or_init(|| self.infer_shape())
            .clone()
    }
}

/// Whether two operand lists bind the same nodes.
pub(crate) fn same_operands(lhs: &[NodeRef], rhs: &[NodeRef]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| Arc::ptr_eq(a, b))
}

/// Renders an integer sequence as `a, b, c` for node descriptions.
pub(crate) fn join(values: &[usize]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hash_op_kind_and_attrs() {
        let lhs = NodeState::new(OpKind::Slice, Vec::new(), 1, &vec![1usize, 2]);
        let rhs = NodeState::new(OpKind::Slice, Vec::new(), 1, &vec![1usize, 2]);
        let other_attrs = NodeState::new(OpKind::Slice, Vec::new(), 1, &vec![2usize, 1]);
        let other_op = NodeState::new(OpKind::Input, Vec::new(), 1, &vec![1usize, 2]);

        assert_eq!(lhs.hash, rhs.hash);
        assert_ne!(lhs.hash, other_attrs.hash);
        assert_ne!(lhs.hash, other_op.hash);
    }

    #[test]
    fn should_describe_state() {
        let state = NodeState::new(OpKind::Slice, Vec::new(), 1, &());
        assert_eq!(state.to_string(), "slice, num_outputs=1");
    }
}
