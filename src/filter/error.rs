use thiserror::Error;

use crate::hierarchy::{HierarchyError, StructureError};

/// Errors returned by the filter.
///
/// Neither variant is worth retrying as-is: the caller has to fix the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Hierarchy or predicate was not supplied.
    #[error("Hierarchy or predicate argument is absent.")]
    NullInput,

    /// Backing data failed the consistency probe or a later read.
    #[error("Hierarchy arrays are inconsistent.")]
    InconsistentStructure(#[source] HierarchyError),

    /// Strict mode found a depth-encoding violation.
    #[error("hierarchy is malformed: {0}")]
    Malformed(#[source] StructureError),
}

/// Errors returned by [`try_filter`](super::try_filter).
#[derive(Debug, Error)]
pub enum TryFilterError<E: std::error::Error + 'static> {
    /// The filter itself rejected the input.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// The predicate failed; carried unchanged.
    #[error(transparent)]
    Predicate(E),
}

impl<E: std::error::Error + 'static> TryFilterError<E> {
    /// Predicate error, if that is what stopped the run.
    pub fn into_predicate_error(self) -> Option<E> {
        match self {
            TryFilterError::Predicate(err) => Some(err),
            TryFilterError::Filter(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FilterError::NullInput.to_string(),
            "Hierarchy or predicate argument is absent."
        );
        let err = FilterError::InconsistentStructure(HierarchyError::LengthMismatch {
            ids: 2,
            depths: 3,
        });
        assert_eq!(err.to_string(), "Hierarchy arrays are inconsistent.");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_predicate_error_is_transparent() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "lookup failed");
        let err: TryFilterError<std::io::Error> = TryFilterError::Predicate(inner);
        assert_eq!(err.to_string(), "lookup failed");
        assert_eq!(err.into_predicate_error().map(|e| e.kind()), Some(std::io::ErrorKind::Other));
    }
}
