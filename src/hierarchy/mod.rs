//! Depth-annotated forest encoding
//!
//! A forest is flattened into DFS pre-order: every node appears before its
//! descendants, and its depth marks the nesting level.
//!
//! ```text
//! ids:    1  2  3  4  5  6  7  8  9  10 11
//! depths: 0  1  2  3  1  0  1  0  1  1  2
//!
//! 1
//! - 2
//! - - 3
//! - - - 4
//! - 5
//! 6
//! - 7
//! 8
//! - 9
//! - 10
//! - - 11
//! ```
//!
//! From one entry to the next, depth may grow by exactly one (child) or drop
//! to any value not above the previous one (sibling or return to an
//! ancestor branch).

mod array;
mod navigation;
mod validation;

pub use array::ArrayHierarchy;
pub use navigation::{ancestors, branch_end, children, parent};
pub use validation::{validate_unique_ids, validate_well_formed, StructureError};

use thiserror::Error;

/// Node identifier stored in a hierarchy.
pub type NodeId = i32;

/// Nesting level of a node; roots have depth 0.
pub type Depth = u32;

/// Errors raised while reading entries of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Requested index is outside `[0, size)` or outside a backing sequence.
    #[error("index {index} out of bounds for hierarchy of size {size}")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Reported size of the hierarchy.
        size: usize,
    },

    /// Backing sequences disagree on their length.
    #[error("backing sequences differ in length: {ids} node ids, {depths} depths")]
    LengthMismatch {
        /// Number of stored node ids.
        ids: usize,
        /// Number of stored depths.
        depths: usize,
    },
}

/// Read-only view over an ordered sequence of `(node id, depth)` entries.
///
/// Implementors answer indexed queries only; everything else is derived.
pub trait Hierarchy {
    /// Number of entries.
    fn size(&self) -> usize;

    /// Node id stored at `index`.
    fn node_id(&self, index: usize) -> Result<NodeId, HierarchyError>;

    /// Depth stored at `index`.
    fn depth(&self, index: usize) -> Result<Depth, HierarchyError>;

    /// True when the hierarchy holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Both halves of the entry at `index`.
    fn entry(&self, index: usize) -> Result<(NodeId, Depth), HierarchyError> {
        Ok((self.node_id(index)?, self.depth(index)?))
    }

    /// Entries in traversal order.
    fn entries(&self) -> Entries<'_, Self>
    where
        Self: Sized,
    {
        Entries {
            hierarchy: self,
            next: 0,
        }
    }

    /// Cheap structural probe: reads the last entry.
    ///
    /// An empty hierarchy has nothing to probe and is always consistent.
    fn check_consistency(&self) -> Result<(), HierarchyError> {
        probe_last(self)
    }

    /// `"[id:depth, id:depth, ...]"` in traversal order.
    ///
    /// Entries that cannot be read are rendered as `?`.
    fn format_string(&self) -> String {
        let parts: Vec<String> = (0..self.size())
            .map(|i| match self.entry(i) {
                Ok((id, depth)) => format!("{id}:{depth}"),
                Err(_) => "?".to_string(),
            })
            .collect();
        format!("[{}]", parts.join(", "))
    }
}

impl<H: Hierarchy + ?Sized> Hierarchy for &H {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn node_id(&self, index: usize) -> Result<NodeId, HierarchyError> {
        (**self).node_id(index)
    }

    fn depth(&self, index: usize) -> Result<Depth, HierarchyError> {
        (**self).depth(index)
    }

    fn check_consistency(&self) -> Result<(), HierarchyError> {
        (**self).check_consistency()
    }
}

/// Read both values at `size() - 1`, skipping empty hierarchies.
pub(crate) fn probe_last<H: Hierarchy + ?Sized>(hierarchy: &H) -> Result<(), HierarchyError> {
    match hierarchy.size() {
        0 => Ok(()),
        size => hierarchy.entry(size - 1).map(|_| ()),
    }
}

/// Iterator over the entries of a [`Hierarchy`].
#[derive(Debug)]
pub struct Entries<'a, H> {
    hierarchy: &'a H,
    next: usize,
}

impl<H: Hierarchy> Iterator for Entries<'_, H> {
    type Item = Result<(NodeId, Depth), HierarchyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.hierarchy.size() {
            return None;
        }
        let item = self.hierarchy.entry(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.hierarchy.size().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<H: Hierarchy> ExactSizeIterator for Entries<'_, H> {}
