//! # Ancestor-closed forest filtering
//!
//! Forests are stored flat: an array of `(node id, depth)` pairs in DFS
//! pre-order. [`filter`] keeps a node only when it and all of its ancestors
//! pass a predicate, and returns the survivors as a new array with their
//! original depths.
//!
//! ## Usage Example
//!
//! ```
//! use hierarchy_filter::{filter_hierarchy, ArrayHierarchy};
//!
//! let forest = ArrayHierarchy::new(
//!     vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
//!     vec![0, 1, 2, 3, 1, 0, 1, 0, 1, 1, 2],
//! )?;
//! let kept = filter_hierarchy(&forest, |id| id % 3 != 0)?;
//! assert_eq!(kept.to_string(), "[1:0, 2:1, 5:1, 8:0, 10:1, 11:2]");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod filter;    // Two-pass exclusion and compaction
pub mod hierarchy; // Flat forest encoding
pub mod io;        // Text parsing and rendering

pub use filter::{
    filter, filter_hierarchy, try_filter, ExclusionKey, Filter, FilterConfig, FilterError,
    FilterOutcome, TryFilterError,
};
pub use hierarchy::{ArrayHierarchy, Depth, Hierarchy, HierarchyError, NodeId, StructureError};
