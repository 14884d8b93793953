use std::collections::HashMap;

use crate::{Node, NodeRef};

/// Deduplicates structurally identical nodes while a graph is being built.
///
/// Lookup is keyed by the structural hash; hash collisions are resolved with
/// [`Node::same_structure`], so only true structural matches are merged.
#[derive(Default)]
pub struct NodeCache {
    mapping: HashMap<u64, Vec<NodeRef>>,
}

impl NodeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct nodes held.
    pub fn len(&self) -> usize {
        self.mapping.values().map(Vec::len).sum()
    }

    /// Whether the cache holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Returns the cached node structurally identical to `node`, registering
    /// `node` when no match exists.
    pub fn get_or_insert(&mut self, node: NodeRef) -> NodeRef {
        let key = node.structural_hash();
        let candidates = self.mapping.entry(key).or_default();

        if let Some(found) = candidates
            .iter()
            .find(|candidate| candidate.same_structure(node.as_ref()))
        {
            log::trace!("reusing {} node {key:#x}", found.op());
            return found.clone();
        }

        log::trace!("registering {} node {key:#x}", node.op());
        candidates.push(node.clone());
        node
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tensile_std::Shape;

    use super::*;
    use crate::{InputIr, SliceIr};

    #[test]
    fn should_merge_structurally_identical_slices() {
        let mut cache = NodeCache::new();
        let input = InputIr::create(Shape::new([8, 8]));

        let first = cache.get_or_insert(SliceIr::create(input.clone(), vec![2, 3], vec![4, 4]));
        let second = cache.get_or_insert(SliceIr::create(input, vec![2, 3], vec![4, 4]));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn should_keep_distinct_slices_apart() {
        let mut cache = NodeCache::new();
        let input = InputIr::create(Shape::new([8, 8]));

        let first = cache.get_or_insert(SliceIr::create(input.clone(), vec![2, 3], vec![4, 4]));
        let second = cache.get_or_insert(SliceIr::create(input, vec![0, 0], vec![4, 4]));

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn should_not_merge_slices_of_different_operands() {
        let mut cache = NodeCache::new();
        let lhs = InputIr::create(Shape::new([8, 8]));
        let rhs = InputIr::create(Shape::new([8, 8]));

        let first = cache.get_or_insert(SliceIr::create(lhs, vec![2, 3], vec![4, 4]));
        let second = cache.get_or_insert(SliceIr::create(rhs, vec![2, 3], vec![4, 4]));

        // Same hash bucket, resolved by the structural comparison.
        assert_eq!(first.structural_hash(), second.structural_hash());
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 2);
    }
}
