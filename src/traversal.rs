use crate::{bucket::Bucket, node::Node};

/// How a visited node hangs off its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    Root,
    Child(Bucket),
}

impl Relation {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Relation::Root => "Root",
            Relation::Child(bucket) => bucket.label(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Visit<'a> {
    pub relation: Relation,
    pub node: &'a Node,
}

/// Pre-order iterator over a tree, children visited in [`Bucket::ALL`] order.
pub struct Traversal<'a> {
    stack: Vec<Visit<'a>>,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let stack = root
            .map(|node| Visit {
                relation: Relation::Root,
                node,
            })
            .into_iter()
            .collect();
        Traversal { stack }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        // Pushed in reverse so the much-smaller child is popped first
        for bucket in Bucket::ALL.into_iter().rev() {
            if let Some(child) = visit.node.child(bucket) {
                self.stack.push(Visit {
                    relation: Relation::Child(bucket),
                    node: child,
                });
            }
        }
        Some(visit)
    }
}
