//! Full structural validation
//!
//! Stricter than the probe the filter performs: walks every entry. Callers
//! opt in explicitly.

use std::collections::HashMap;

use thiserror::Error;

use super::{Depth, Hierarchy, HierarchyError, NodeId};

/// Violations of the depth-encoding rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// An entry could not be read.
    #[error(transparent)]
    Unreadable(#[from] HierarchyError),

    /// The first entry is not a root.
    #[error("first entry has depth {depth}, expected 0")]
    NonZeroRootDepth {
        /// Depth found at index 0.
        depth: Depth,
    },

    /// Depth grew by more than one level between neighbours.
    #[error("depth jumps from {previous} to {depth} at index {index}")]
    DepthJump {
        /// Index of the offending entry.
        index: usize,
        /// Depth of the preceding entry.
        previous: Depth,
        /// Depth of the offending entry.
        depth: Depth,
    },

    /// Same node id at two positions.
    #[error("node id {node_id} appears at indices {first} and {second}")]
    DuplicateNodeId {
        /// Repeated id.
        node_id: NodeId,
        /// First position holding the id.
        first: usize,
        /// Later position holding the id.
        second: usize,
    },
}

/// Check backing consistency, root depth and depth steps for every entry.
pub fn validate_well_formed<H: Hierarchy + ?Sized>(hierarchy: &H) -> Result<(), StructureError> {
    hierarchy.check_consistency()?;

    let mut previous: Option<Depth> = None;
    for index in 0..hierarchy.size() {
        let depth = hierarchy.depth(index)?;
        match previous {
            None if depth != 0 => return Err(StructureError::NonZeroRootDepth { depth }),
            Some(prev) if depth > prev.saturating_add(1) => {
                return Err(StructureError::DepthJump {
                    index,
                    previous: prev,
                    depth,
                })
            }
            _ => {}
        }
        previous = Some(depth);
    }
    Ok(())
}

/// Reject hierarchies that reuse a node id.
pub fn validate_unique_ids<H: Hierarchy + ?Sized>(hierarchy: &H) -> Result<(), StructureError> {
    let mut seen: HashMap<NodeId, usize> = HashMap::with_capacity(hierarchy.size());
    for index in 0..hierarchy.size() {
        let node_id = hierarchy.node_id(index)?;
        if let Some(&first) = seen.get(&node_id) {
            return Err(StructureError::DuplicateNodeId {
                node_id,
                first,
                second: index,
            });
        }
        seen.insert(node_id, index);
    }
    Ok(())
}
