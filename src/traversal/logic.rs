//! Depth-first exploration from the entry row towards the exit row.
//!
//! Uses an explicit stack rather than recursion. Neighbours are pushed in the
//! order North, East, West, South, so the most recently pushed South
//! neighbour is explored first.

use log::trace;

use super::{ExploreMode, TraversalOutcome, TraversalState};
use crate::cave::{Cave, Position};

/// A single traversal attempt over a borrowed cave.
///
/// Drive it with [`Traversal::step`] to observe intermediate states, or with
/// [`Traversal::run`] to go straight to the outcome.
#[derive(Debug)]
pub struct Traversal<'a> {
    cave: &'a mut Cave,
    mode: ExploreMode,
    frontier: Vec<Position>,
    state: TraversalState,
    exits_reached: u32,
}

impl<'a> Traversal<'a> {
    pub fn new(cave: &'a mut Cave, mode: ExploreMode) -> Self {
        Self {
            cave,
            mode,
            frontier: Vec::new(),
            state: TraversalState::Idle,
            exits_reached: 0,
        }
    }

    pub fn state(&self) -> TraversalState {
        self.state
    }

    pub fn exits_reached(&self) -> u32 {
        self.exits_reached
    }

    /// Regions discovered but not yet expanded.
    pub fn frontier(&self) -> &[Position] {
        &self.frontier
    }

    /// Seed the frontier with every explorable region of the entry row.
    ///
    /// Does nothing unless the traversal is idle.
    pub fn start(&mut self) {
        if self.state != TraversalState::Idle {
            return;
        }

        let entries: Vec<Position> = self.cave.entry_positions().collect();
        for pos in entries {
            self.scout(pos);
        }

        self.state = if self.frontier.is_empty() {
            TraversalState::Done
        } else {
            TraversalState::Exploring
        };
    }

    /// Advance by one frontier region and return the resulting state.
    pub fn step(&mut self) -> TraversalState {
        match self.state {
            TraversalState::Idle => self.start(),
            TraversalState::Exploring => self.expand_top(),
            TraversalState::Done => {}
        }
        self.state
    }

    /// Run to completion.
    pub fn run(mut self) -> TraversalOutcome {
        while self.step() != TraversalState::Done {}
        self.outcome()
    }

    pub fn outcome(&self) -> TraversalOutcome {
        TraversalOutcome {
            exits_reached: self.exits_reached,
            regions_visited: self.cave.visited_count(),
        }
    }

    fn expand_top(&mut self) {
        // Peek first: in statistical mode the exit region stays on the stack.
        let Some(&pos) = self.frontier.last() else {
            self.state = TraversalState::Done;
            return;
        };

        if pos.row == self.cave.exit_row() {
            self.exits_reached += 1;
            trace!("exit reached at ({}, {})", pos.row, pos.col);
            if self.mode.stops_at_first_exit() {
                self.state = TraversalState::Done;
                return;
            }
        }

        self.frontier.pop();
        for neighbor in self.cave.neighbors(pos) {
            self.scout(neighbor);
        }

        if self.frontier.is_empty() {
            self.state = TraversalState::Done;
        }
    }

    fn scout(&mut self, pos: Position) {
        if self.cave.is_explorable(pos) {
            self.cave.mark_visited(pos);
            self.frontier.push(pos);
        }
    }
}

/// Run one traversal of `cave` from the entry row.
///
/// Visited flags are left set so the caller can render the explored map;
/// call [`Cave::reset`] before traversing the same cave again.
pub fn attempt_traverse(cave: &mut Cave, mode: ExploreMode) -> TraversalOutcome {
    Traversal::new(cave, mode).run()
}
