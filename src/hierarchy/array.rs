//! Array-backed hierarchy storage
//!
//! Two parallel sequences: node ids and depths, indexed by traversal
//! position.

use std::fmt;

use super::{probe_last, Depth, Hierarchy, HierarchyError, NodeId};

/// Hierarchy stored as two parallel owned sequences.
///
/// Immutable once built. Sequences of different length can only be produced
/// through [`ArrayHierarchy::from_raw_parts`]; such a value reports the depth
/// sequence length as its size and fails its consistency check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrayHierarchy {
    node_ids: Vec<NodeId>,
    depths: Vec<Depth>,
}

impl ArrayHierarchy {
    /// Build from two equal-length sequences.
    pub fn new(node_ids: Vec<NodeId>, depths: Vec<Depth>) -> Result<Self, HierarchyError> {
        if node_ids.len() != depths.len() {
            return Err(HierarchyError::LengthMismatch {
                ids: node_ids.len(),
                depths: depths.len(),
            });
        }
        Ok(Self { node_ids, depths })
    }

    /// Build without checking lengths.
    ///
    /// Useful for wrapping storage produced elsewhere; inconsistencies
    /// surface on read or through [`Hierarchy::check_consistency`].
    pub fn from_raw_parts(node_ids: Vec<NodeId>, depths: Vec<Depth>) -> Self {
        Self { node_ids, depths }
    }

    /// Hierarchy with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            node_ids: Vec::with_capacity(capacity),
            depths: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry; only the filter builds hierarchies this way.
    pub(crate) fn push(&mut self, node_id: NodeId, depth: Depth) {
        self.node_ids.push(node_id);
        self.depths.push(depth);
    }

    /// Stored node ids in traversal order.
    pub fn ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    /// Stored depths in traversal order.
    pub fn depths(&self) -> &[Depth] {
        &self.depths
    }

    /// Split back into the two backing sequences.
    pub fn into_parts(self) -> (Vec<NodeId>, Vec<Depth>) {
        (self.node_ids, self.depths)
    }
}

impl Hierarchy for ArrayHierarchy {
    fn size(&self) -> usize {
        self.depths.len()
    }

    fn node_id(&self, index: usize) -> Result<NodeId, HierarchyError> {
        self.node_ids
            .get(index)
            .copied()
            .ok_or(HierarchyError::IndexOutOfBounds {
                index,
                size: self.node_ids.len(),
            })
    }

    fn depth(&self, index: usize) -> Result<Depth, HierarchyError> {
        self.depths
            .get(index)
            .copied()
            .ok_or(HierarchyError::IndexOutOfBounds {
                index,
                size: self.depths.len(),
            })
    }

    fn check_consistency(&self) -> Result<(), HierarchyError> {
        if self.node_ids.len() != self.depths.len() {
            return Err(HierarchyError::LengthMismatch {
                ids: self.node_ids.len(),
                depths: self.depths.len(),
            });
        }
        probe_last(self)
    }
}

impl FromIterator<(NodeId, Depth)> for ArrayHierarchy {
    fn from_iter<I: IntoIterator<Item = (NodeId, Depth)>>(iter: I) -> Self {
        let (node_ids, depths) = iter.into_iter().unzip();
        Self { node_ids, depths }
    }
}

impl fmt::Display for ArrayHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = ArrayHierarchy::new(vec![0, 1], vec![0, 0, 0]).unwrap_err();
        assert_eq!(err, HierarchyError::LengthMismatch { ids: 2, depths: 3 });
    }

    #[test]
    fn test_indexed_reads() {
        let h = ArrayHierarchy::new(vec![7, 8], vec![0, 1]).unwrap();
        assert_eq!(h.size(), 2);
        assert_eq!(h.node_id(1), Ok(8));
        assert_eq!(h.depth(0), Ok(0));
        assert_eq!(
            h.node_id(2),
            Err(HierarchyError::IndexOutOfBounds { index: 2, size: 2 })
        );
    }

    #[test]
    fn test_raw_parts_size_follows_depths() {
        let longer_ids = ArrayHierarchy::from_raw_parts(vec![1, 2, 3], vec![0, 1]);
        assert_eq!(longer_ids.size(), 2);
        assert!(longer_ids.check_consistency().is_err());

        let shorter_ids = ArrayHierarchy::from_raw_parts(vec![1, 2], vec![0, 1, 2]);
        assert_eq!(shorter_ids.size(), 3);
        assert!(shorter_ids.node_id(2).is_err());
    }

    #[test]
    fn test_display_matches_format_string() {
        let h: ArrayHierarchy = [(1, 0), (2, 1), (3, 0)].into_iter().collect();
        assert_eq!(h.to_string(), "[1:0, 2:1, 3:0]");
        assert_eq!(h.to_string(), h.format_string());
        assert_eq!(ArrayHierarchy::empty().to_string(), "[]");
    }

    #[test]
    fn test_display_marks_missing_ids() {
        let short_ids = ArrayHierarchy::from_raw_parts(vec![1, 2], vec![0, 1, 2]);
        assert_eq!(short_ids.to_string(), "[1:0, 2:1, ?]");
        assert_eq!(short_ids.to_string(), short_ids.format_string());
    }

    #[test]
    fn test_into_parts() {
        let h = ArrayHierarchy::new(vec![4, 5], vec![0, 0]).unwrap();
        assert_eq!(h.into_parts(), (vec![4, 5], vec![0, 0]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_layout() {
        let h = ArrayHierarchy::new(vec![1, 2], vec![0, 1]).unwrap();
        assert_eq!(
            serde_json::to_string(&h).unwrap(),
            r#"{"node_ids":[1,2],"depths":[0,1]}"#
        );
    }
}
