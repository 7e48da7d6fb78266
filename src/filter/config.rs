/// How excluded entries are remembered between the two passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExclusionKey {
    /// Key on node id: every entry sharing an excluded id is dropped.
    #[default]
    NodeId,
    /// Key on traversal position: duplicates are judged independently.
    Position,
}

/// Options for a [`Filter`](super::Filter) run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Exclusion bookkeeping mode.
    pub exclusion_key: ExclusionKey,
    /// Validate every depth step before filtering instead of probing the
    /// last entry only.
    pub strict: bool,
}

impl FilterConfig {
    /// Select the exclusion bookkeeping mode.
    pub fn with_exclusion_key(mut self, key: ExclusionKey) -> Self {
        self.exclusion_key = key;
        self
    }

    /// Enable full structural validation.
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }
}
