//! Ancestor-closed filtering
//!
//! A node survives iff it and every one of its ancestors pass the predicate.
//! One scan in traversal order finds the excluded entries: once a node
//! fails, the deeper entries that follow belong to its branch and are
//! dropped without consulting the predicate. A second scan copies the
//! survivors, depths unchanged, into a new [`ArrayHierarchy`].
//!
//! Only the last entry is probed for consistency unless
//! [`FilterConfig::strict`] is set.

mod config;
mod engine;
mod error;

pub use config::{ExclusionKey, FilterConfig};
pub use engine::{Filter, FilterOutcome};
pub use error::{FilterError, TryFilterError};

use crate::hierarchy::{ArrayHierarchy, Hierarchy, NodeId};

/// Filter with possibly absent arguments.
///
/// Either argument being `None` yields [`FilterError::NullInput`].
pub fn filter<H, P>(
    hierarchy: Option<&H>,
    predicate: Option<P>,
) -> Result<ArrayHierarchy, FilterError>
where
    H: Hierarchy + ?Sized,
    P: FnMut(NodeId) -> bool,
{
    match (hierarchy, predicate) {
        (Some(hierarchy), Some(predicate)) => filter_hierarchy(hierarchy, predicate),
        _ => Err(FilterError::NullInput),
    }
}

/// Filter with the default configuration.
pub fn filter_hierarchy<H, P>(hierarchy: &H, predicate: P) -> Result<ArrayHierarchy, FilterError>
where
    H: Hierarchy + ?Sized,
    P: FnMut(NodeId) -> bool,
{
    Filter::default()
        .run(hierarchy, predicate)
        .map(|outcome| outcome.hierarchy)
}

/// Filter with a fallible predicate; its first error is returned as-is.
pub fn try_filter<H, P, E>(
    hierarchy: &H,
    predicate: P,
) -> Result<ArrayHierarchy, TryFilterError<E>>
where
    H: Hierarchy + ?Sized,
    P: FnMut(NodeId) -> Result<bool, E>,
    E: std::error::Error + 'static,
{
    Filter::default()
        .try_run(hierarchy, predicate)
        .map(|outcome| outcome.hierarchy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::HierarchyError;

    #[test]
    fn test_absent_arguments() {
        let h = ArrayHierarchy::empty();
        let none_h: Option<&ArrayHierarchy> = None;
        assert_eq!(filter(none_h, Some(|_: NodeId| true)), Err(FilterError::NullInput));
        assert_eq!(
            filter(Some(&h), None::<fn(NodeId) -> bool>),
            Err(FilterError::NullInput)
        );
    }

    #[test]
    fn test_absent_predicate_wins_over_inconsistency() {
        let broken = ArrayHierarchy::from_raw_parts(vec![0, 1], vec![0, 0, 0]);
        assert_eq!(
            filter(Some(&broken), None::<fn(NodeId) -> bool>),
            Err(FilterError::NullInput)
        );
        assert_eq!(
            filter(Some(&broken), Some(|_: NodeId| true)),
            Err(FilterError::InconsistentStructure(HierarchyError::LengthMismatch {
                ids: 2,
                depths: 3
            }))
        );
    }

    #[test]
    fn test_trait_object_input() {
        let h = ArrayHierarchy::new(vec![1, 2], vec![0, 1]).unwrap();
        let dynamic: &dyn Hierarchy = &h;
        let out = filter_hierarchy(dynamic, |id| id == 1).unwrap();
        assert_eq!(out.to_string(), "[1:0]");
    }

    #[derive(Debug, thiserror::Error)]
    #[error("id {0} unknown")]
    struct Unknown(NodeId);

    #[test]
    fn test_try_filter_stops_on_predicate_error() {
        let h = ArrayHierarchy::new(vec![1, 2, 3], vec![0, 0, 0]).unwrap();
        let err = try_filter(&h, |id| if id == 2 { Err(Unknown(id)) } else { Ok(true) })
            .unwrap_err();
        assert_eq!(err.to_string(), "id 2 unknown");
        assert!(matches!(err, TryFilterError::Predicate(Unknown(2))));

        let ok = try_filter(&h, |id| Ok::<_, Unknown>(id != 3)).unwrap();
        assert_eq!(ok.to_string(), "[1:0, 2:0]");
    }
}
