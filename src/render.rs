//! Text rendering of a tree

use std::fmt;
use std::io::{self, Write};

use crate::{error::Result, QuadTree};

/// First line of every rendering, also for an empty tree.
pub const PRINT_HEADER: &str = "Printing QuadTree:";
/// Indentation repeated once per level.
pub const INDENT: &str = "    ";

impl QuadTree {
    /// Print the tree to stdout.
    pub fn print(&self) -> Result<()> {
        let stdout = io::stdout();
        self.write_to(&mut stdout.lock())
    }

    /// Render the tree into `writer`, one line per node in pre-order.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PRINT_HEADER}")?;
        for visit in self.iter() {
            writeln!(
                f,
                "{}{}:{}",
                INDENT.repeat(visit.node.level()),
                visit.relation.label(),
                visit.node.value()
            )?;
        }
        Ok(())
    }
}
