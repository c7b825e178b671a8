//! Traversal modes, states and results.

/// How far the search goes once an exit region is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreMode {
    /// Keep exploring after an exit is found so the visited map shows every
    /// region reachable from the entry row.
    ShowPaths,
    /// Stop on the first exit region; only the yes/no answer matters.
    Statistical,
}

impl ExploreMode {
    pub fn stops_at_first_exit(self) -> bool {
        matches!(self, ExploreMode::Statistical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalState {
    /// Frontier not yet seeded.
    Idle,
    Exploring,
    /// Frontier exhausted or stopped on an exit.
    Done,
}

/// Result of one traversal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalOutcome {
    /// Exit-row regions taken off the frontier. At most 1 in statistical mode.
    pub exits_reached: u32,
    /// Regions marked visited by the end of the attempt.
    pub regions_visited: usize,
}

impl TraversalOutcome {
    pub fn exit_found(&self) -> bool {
        self.exits_reached > 0
    }
}
