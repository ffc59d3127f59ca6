//! Line indices.

use std::fmt;

/// Index of a line within a built network.
///
/// Lines are numbered in the order they were declared, so a lower
/// `LineId` means the line appeared earlier in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}
