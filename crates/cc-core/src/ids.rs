//! Graph node identifiers.
//!
//! Nodes live in dense arenas, so a `NodeId` is just the position of the node
//! in its owning `Vec`.  Ids are only meaningful inside the graph that issued
//! them; never compare ids from two different builds.

use std::fmt;

/// Index of a node in a graph arena (indoor floor graph or footpath network).
///
/// Displays as `n<index>`, the same form `Graph::resolve` accepts for
/// unlabelled floor nodes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Never issued by a builder.  Solvers reject it like any other id
    /// outside their graph.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Id of the next node pushed onto an arena currently holding `len`
    /// nodes.
    #[inline]
    pub fn at(len: usize) -> NodeId {
        NodeId(len as u32)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() { write!(f, "n{}", self.0) } else { f.write_str("n<invalid>") }
    }
}
