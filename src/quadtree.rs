use crate::{bucket::Bucket, node::Node, traversal::Traversal};
use tracing::{debug, trace};

/// A four-way branching tree over distinct `i32` values.
///
/// The first value becomes the root. Every later value walks down from the
/// root, at each node picking one of four slots by its difference to that
/// node's value (see [`Bucket::classify`]), until it lands in an empty slot.
/// Values equal to a node on the way are dropped.
pub struct QuadTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl QuadTree {
    /// An empty tree, the same as constructing from an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        QuadTree { root: None, len: 0 }
    }

    /// Build a tree from an ordered sequence of values.
    pub fn construct<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut tree = QuadTree::new();
        tree.extend(values);
        debug!(
            nodes = tree.len,
            height = tree.height(),
            "constructed quadtree"
        );
        tree
    }

    /// Insert a value, returning `false` if it was already present.
    ///
    /// Only an empty slot is ever written; a filled slot is descended into.
    pub fn insert(&mut self, value: i32) -> bool {
        let mut level = 0;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            let Some(bucket) = Bucket::classify(node.value, value) else {
                debug!(value, level = node.level, "dropping duplicate value");
                return false;
            };
            level = node.level + 1;
            slot = node.slot_mut(bucket);
        }
        trace!(value, level, "creating node");
        *slot = Some(Box::new(Node::new(value, level)));
        self.len += 1;
        true
    }

    #[must_use]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Pre-order walk: a node, then its much-smaller, smaller, bigger and
    /// much-bigger subtrees.
    #[must_use]
    pub fn iter(&self) -> Traversal<'_> {
        Traversal::new(self.root())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels in the tree, 0 when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        self.iter()
            .map(|visit| visit.node.level() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl Default for QuadTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for QuadTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for QuadTree {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        QuadTree::construct(values)
    }
}

// Skewed input produces chains as long as the input, so the boxes are
// released one at a time instead of through nested drops.
impl Drop for QuadTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children().into_iter().flatten());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QuadTree;
    use crate::bucket::Bucket;

    #[test]
    fn insert() {
        let mut tree = QuadTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);

        // The first insertion creates the root
        assert!(tree.insert(100));
        let root = tree.root().expect("root");
        assert_eq!(root.value(), 100);
        assert_eq!(root.level(), 0);

        assert!(tree.insert(111));
        assert!(tree.insert(110));
        assert!(tree.insert(89));
        assert!(tree.insert(90));
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.height(), 2);

        let root = tree.root().expect("root");
        assert_eq!(root.child(Bucket::MuchBigger).map(|n| n.value()), Some(111));
        assert_eq!(root.child(Bucket::Bigger).map(|n| n.value()), Some(110));
        assert_eq!(root.child(Bucket::MuchSmaller).map(|n| n.value()), Some(89));
        assert_eq!(root.child(Bucket::Smaller).map(|n| n.value()), Some(90));
    }

    #[test]
    fn insert_descends_into_filled_slots() {
        let mut tree = QuadTree::construct([100, 105, 103, 104]);

        // 105 fills root.bigger, 103 lands under it, 104 goes one level further
        let bigger = tree.root().and_then(|root| root.bigger()).expect("bigger");
        assert_eq!(bigger.value(), 105);
        assert_eq!(bigger.level(), 1);
        let smaller = bigger.smaller().expect("smaller");
        assert_eq!(smaller.value(), 103);
        assert_eq!(smaller.level(), 2);
        let deepest = smaller.bigger().expect("bigger of 103");
        assert_eq!(deepest.value(), 104);
        assert_eq!(deepest.level(), 3);

        // Nothing already in the tree is overwritten
        assert!(!tree.insert(103));
        assert!(!tree.insert(100));
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn duplicates() {
        let tree: QuadTree = [7, 7, 7, 7].into_iter().collect();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().expect("root").is_leaf());
    }

    #[test]
    fn skewed_drop() {
        // Every value is more than 10 above the previous one, so the tree is a
        // single much-bigger chain.
        let n = 10_000;
        let tree = QuadTree::construct((0..n).map(|i| i * 11));
        assert_eq!(tree.len(), n as usize);
        assert_eq!(tree.height(), n as usize);
        drop(tree);
    }
}
