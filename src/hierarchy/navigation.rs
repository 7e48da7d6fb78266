//! Parent/child relationships recovered from positions and depths
//!
//! All queries scan linearly from `index`; nothing is cached.

use super::{Hierarchy, HierarchyError};

/// Nearest preceding index one level shallower, or `None` for a root.
pub fn parent<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    index: usize,
) -> Result<Option<usize>, HierarchyError> {
    let depth = hierarchy.depth(index)?;
    if depth == 0 {
        return Ok(None);
    }
    for j in (0..index).rev() {
        if hierarchy.depth(j)? == depth - 1 {
            return Ok(Some(j));
        }
    }
    Ok(None)
}

/// Exclusive end of the branch rooted at `index`.
///
/// The branch is `index` plus the contiguous run of deeper entries after it.
pub fn branch_end<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    index: usize,
) -> Result<usize, HierarchyError> {
    let depth = hierarchy.depth(index)?;
    let mut end = index + 1;
    while end < hierarchy.size() && hierarchy.depth(end)? > depth {
        end += 1;
    }
    Ok(end)
}

/// Direct children of `index`, in order.
pub fn children<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    index: usize,
) -> Result<Vec<usize>, HierarchyError> {
    let depth = hierarchy.depth(index)?;
    let end = branch_end(hierarchy, index)?;
    let mut result = Vec::new();
    for j in index + 1..end {
        if hierarchy.depth(j)? == depth + 1 {
            result.push(j);
        }
    }
    Ok(result)
}

/// Ancestors of `index`, nearest first.
pub fn ancestors<H: Hierarchy + ?Sized>(
    hierarchy: &H,
    index: usize,
) -> Result<Vec<usize>, HierarchyError> {
    let mut result = Vec::new();
    let mut current = index;
    while let Some(up) = parent(hierarchy, current)? {
        result.push(up);
        current = up;
    }
    Ok(result)
}
