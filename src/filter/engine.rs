use std::collections::HashSet;
use std::convert::Infallible;

use bitvec::prelude::*;
use tracing::{debug, warn};

use super::{ExclusionKey, FilterConfig, FilterError, TryFilterError};
use crate::hierarchy::{
    validate_well_formed, ArrayHierarchy, Depth, Hierarchy, HierarchyError, NodeId, StructureError,
};

/// Result of a filter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Retained entries, original depths untouched.
    pub hierarchy: ArrayHierarchy,
    /// Number of input entries dropped.
    pub excluded: usize,
    /// Number of predicate evaluations performed.
    pub predicate_calls: usize,
}

/// Configured filter.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    config: FilterConfig,
}

/// Pass 1 bookkeeping.
enum ExclusionSet {
    ById(HashSet<NodeId>),
    ByPosition(BitVec),
}

impl ExclusionSet {
    fn new(key: ExclusionKey, size: usize) -> Self {
        match key {
            ExclusionKey::NodeId => ExclusionSet::ById(HashSet::new()),
            ExclusionKey::Position => ExclusionSet::ByPosition(bitvec![0; size]),
        }
    }

    fn mark(&mut self, index: usize, node_id: NodeId) {
        match self {
            ExclusionSet::ById(ids) => {
                ids.insert(node_id);
            }
            ExclusionSet::ByPosition(bits) => bits.set(index, true),
        }
    }

    fn contains(&self, index: usize, node_id: NodeId) -> bool {
        match self {
            ExclusionSet::ById(ids) => ids.contains(&node_id),
            ExclusionSet::ByPosition(bits) => bits[index],
        }
    }
}

/// Branch-pruning state while scanning in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Healthy,
    /// Inside the branch of a node that failed at this depth.
    Failed(Depth),
}

impl Filter {
    /// Create a filter with the given configuration.
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Keep nodes whose id and whose ancestors' ids all pass `predicate`.
    pub fn run<H, P>(&self, hierarchy: &H, mut predicate: P) -> Result<FilterOutcome, FilterError>
    where
        H: Hierarchy + ?Sized,
        P: FnMut(NodeId) -> bool,
    {
        self.try_run(hierarchy, |id| Ok::<_, Infallible>(predicate(id)))
            .map_err(|err| match err {
                TryFilterError::Filter(err) => err,
                TryFilterError::Predicate(never) => match never {},
            })
    }

    /// Like [`Filter::run`], stopping at the first predicate failure.
    pub fn try_run<H, P, E>(
        &self,
        hierarchy: &H,
        mut predicate: P,
    ) -> Result<FilterOutcome, TryFilterError<E>>
    where
        H: Hierarchy + ?Sized,
        P: FnMut(NodeId) -> Result<bool, E>,
        E: std::error::Error + 'static,
    {
        self.validate(hierarchy)?;

        let size = hierarchy.size();
        let mut excluded = ExclusionSet::new(self.config.exclusion_key, size);
        let mut state = ScanState::Healthy;
        let mut predicate_calls = 0;

        for index in 0..size {
            let (node_id, depth) = hierarchy.entry(index).map_err(inconsistent)?;
            if let ScanState::Failed(failed_depth) = state {
                if depth > failed_depth {
                    excluded.mark(index, node_id);
                    continue;
                }
            }
            predicate_calls += 1;
            if predicate(node_id).map_err(TryFilterError::Predicate)? {
                // A passing node at or above the failed depth closes that branch.
                state = ScanState::Healthy;
            } else {
                excluded.mark(index, node_id);
                state = ScanState::Failed(depth);
            }
        }

        let mut retained = ArrayHierarchy::with_capacity(size);
        for index in 0..size {
            let (node_id, depth) = hierarchy.entry(index).map_err(inconsistent)?;
            if !excluded.contains(index, node_id) {
                retained.push(node_id, depth);
            }
        }

        let outcome = FilterOutcome {
            excluded: size - retained.size(),
            hierarchy: retained,
            predicate_calls,
        };
        debug!(
            input = size,
            retained = outcome.hierarchy.size(),
            excluded = outcome.excluded,
            predicate_calls,
            key = ?self.config.exclusion_key,
            "hierarchy filtered"
        );
        Ok(outcome)
    }

    fn validate<H: Hierarchy + ?Sized>(&self, hierarchy: &H) -> Result<(), FilterError> {
        hierarchy.check_consistency().map_err(|err| {
            warn!(error = %err, size = hierarchy.size(), "consistency probe failed");
            FilterError::InconsistentStructure(err)
        })?;
        if !self.config.strict {
            return Ok(());
        }
        validate_well_formed(hierarchy).map_err(|err| match err {
            StructureError::Unreadable(err) => {
                warn!(error = %err, "unreadable entry during strict validation");
                FilterError::InconsistentStructure(err)
            }
            err => {
                warn!(error = %err, "strict validation rejected hierarchy");
                FilterError::Malformed(err)
            }
        })
    }
}

fn inconsistent(err: HierarchyError) -> FilterError {
    FilterError::InconsistentStructure(err)
}
