use crate::bucket::Bucket;

pub struct Node {
    pub(crate) value: i32,
    pub(crate) level: usize,
    pub(crate) much_smaller: Option<Box<Node>>,
    pub(crate) smaller: Option<Box<Node>>,
    pub(crate) bigger: Option<Box<Node>>,
    pub(crate) much_bigger: Option<Box<Node>>,
}

impl Node {
    #[must_use]
    pub(crate) fn new(value: i32, level: usize) -> Node {
        Node {
            value,
            level,
            much_smaller: None,
            smaller: None,
            bigger: None,
            much_bigger: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Depth of the node, the root being at level 0.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn child(&self, bucket: Bucket) -> Option<&Node> {
        match bucket {
            Bucket::MuchSmaller => self.much_smaller.as_deref(),
            Bucket::Smaller => self.smaller.as_deref(),
            Bucket::Bigger => self.bigger.as_deref(),
            Bucket::MuchBigger => self.much_bigger.as_deref(),
        }
    }

    #[must_use]
    pub fn much_smaller(&self) -> Option<&Node> {
        self.much_smaller.as_deref()
    }

    #[must_use]
    pub fn smaller(&self) -> Option<&Node> {
        self.smaller.as_deref()
    }

    #[must_use]
    pub fn bigger(&self) -> Option<&Node> {
        self.bigger.as_deref()
    }

    #[must_use]
    pub fn much_bigger(&self) -> Option<&Node> {
        self.much_bigger.as_deref()
    }

    /// Present children with their relation, in visitation order.
    pub fn children(&self) -> impl Iterator<Item = (Bucket, &Node)> + '_ {
        Bucket::ALL
            .into_iter()
            .filter_map(move |bucket| self.child(bucket).map(|child| (bucket, child)))
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }

    pub(crate) fn slot_mut(&mut self, bucket: Bucket) -> &mut Option<Box<Node>> {
        match bucket {
            Bucket::MuchSmaller => &mut self.much_smaller,
            Bucket::Smaller => &mut self.smaller,
            Bucket::Bigger => &mut self.bigger,
            Bucket::MuchBigger => &mut self.much_bigger,
        }
    }

    // Detach all children, leaving every slot empty.
    pub(crate) fn take_children(&mut self) -> [Option<Box<Node>>; 4] {
        [
            self.much_smaller.take(),
            self.smaller.take(),
            self.bigger.take(),
            self.much_bigger.take(),
        ]
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use crate::bucket::Bucket;

    #[test]
    fn slots() {
        let mut node = Node::new(100, 0);
        assert!(node.is_leaf());

        *node.slot_mut(Bucket::Bigger) = Some(Box::new(Node::new(105, 1)));
        *node.slot_mut(Bucket::MuchSmaller) = Some(Box::new(Node::new(20, 1)));
        assert!(!node.is_leaf());
        assert_eq!(node.bigger().map(Node::value), Some(105));
        assert_eq!(node.child(Bucket::MuchSmaller).map(Node::value), Some(20));
        assert!(node.smaller().is_none());
        assert!(node.much_bigger().is_none());

        // Children come out in visitation order, regardless of attach order
        let children: Vec<_> = node
            .children()
            .map(|(bucket, child)| (bucket, child.value()))
            .collect();
        assert_eq!(
            children,
            vec![(Bucket::MuchSmaller, 20), (Bucket::Bigger, 105)]
        );

        let taken = node.take_children();
        assert_eq!(taken.iter().flatten().count(), 2);
        assert!(node.is_leaf());
    }
}
