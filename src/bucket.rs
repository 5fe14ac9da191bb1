/// Differences strictly above this value route a child into the much-bigger slot.
pub const MUCH_BIGGER_THRESHOLD: i64 = 10;
/// Differences strictly below this value route a child into the much-smaller slot.
pub const MUCH_SMALLER_THRESHOLD: i64 = -10;

/// The relation between a node and one of its four children.
///
/// Variants are declared in visitation order, so `Bucket::ALL` is the order in
/// which the printer and the traversal iterator walk the children of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    MuchSmaller,
    Smaller,
    Bigger,
    MuchBigger,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::MuchSmaller,
        Bucket::Smaller,
        Bucket::Bigger,
        Bucket::MuchBigger,
    ];

    /// Classify `value` relative to a node holding `parent`.
    ///
    /// The "much" thresholds are checked before the plain comparisons, so a
    /// difference of 11 is much-bigger even though it is also bigger.
    /// Returns `None` when the two values are equal.
    #[must_use]
    pub fn classify(parent: i32, value: i32) -> Option<Bucket> {
        let diff = i64::from(value) - i64::from(parent);
        if diff > MUCH_BIGGER_THRESHOLD {
            Some(Bucket::MuchBigger)
        } else if diff < MUCH_SMALLER_THRESHOLD {
            Some(Bucket::MuchSmaller)
        } else if value < parent {
            Some(Bucket::Smaller)
        } else if value > parent {
            Some(Bucket::Bigger)
        } else {
            None
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Bucket::MuchSmaller => "Much Smaller",
            Bucket::Smaller => "Smaller",
            Bucket::Bigger => "Bigger",
            Bucket::MuchBigger => "Much Bigger",
        }
    }
}
