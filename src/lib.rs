mod bucket;
mod counts;
mod error;
mod node;
mod quadtree;
mod render;
mod traversal;

pub use bucket::{Bucket, MUCH_BIGGER_THRESHOLD, MUCH_SMALLER_THRESHOLD};
pub use counts::Counts;
pub use error::{Error, Result};
pub use node::Node;
pub use quadtree::QuadTree;
pub use render::{INDENT, PRINT_HEADER};
pub use traversal::{Relation, Traversal, Visit};
