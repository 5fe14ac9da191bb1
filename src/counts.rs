use crate::{bucket::Bucket, traversal::Relation, QuadTree};

/// Node population of a tree, per relation to the parent.
///
/// Each non-root node is counted once, under the slot it occupies in its
/// parent, across all levels of the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    /// 1 if the tree has a root, 0 otherwise.
    pub root: u8,
    pub much_smaller: usize,
    pub smaller: usize,
    pub bigger: usize,
    pub much_bigger: usize,
}

impl Counts {
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::MuchSmaller => self.much_smaller,
            Bucket::Smaller => self.smaller,
            Bucket::Bigger => self.bigger,
            Bucket::MuchBigger => self.much_bigger,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        usize::from(self.root) + self.much_smaller + self.smaller + self.bigger + self.much_bigger
    }

    fn record(mut self, relation: Relation) -> Self {
        match relation {
            Relation::Root => self.root = 1,
            Relation::Child(Bucket::MuchSmaller) => self.much_smaller += 1,
            Relation::Child(Bucket::Smaller) => self.smaller += 1,
            Relation::Child(Bucket::Bigger) => self.bigger += 1,
            Relation::Child(Bucket::MuchBigger) => self.much_bigger += 1,
        }
        self
    }
}

impl QuadTree {
    /// Tally nodes per relation. An empty tree yields all zeros.
    #[must_use]
    pub fn counts(&self) -> Counts {
        self.iter()
            .fold(Counts::default(), |counts, visit| counts.record(visit.relation))
    }
}
