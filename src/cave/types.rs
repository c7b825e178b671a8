//! Cave data structures.
//!
//! A cave is a square grid of regions. Each region is either obstructed or
//! accessible, and carries a visited flag the traversal sets as it explores.

use serde::Serialize;

use crate::error::CaveError;

/// Row 0 is where every traversal starts.
pub const ENTRY_ROW: usize = 0;

/// Grid coordinates of a region, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A single unit of the cave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    position: Position,
    /// Fixed at creation; an obstructed region can never be entered.
    obstructed: bool,
    visited: bool,
}

impl Region {
    pub fn new(position: Position, obstructed: bool) -> Self {
        Self {
            position,
            obstructed,
            visited: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_obstructed(&self) -> bool {
        self.obstructed
    }

    pub fn is_accessible(&self) -> bool {
        !self.obstructed
    }

    pub fn is_unvisited(&self) -> bool {
        !self.visited
    }

    /// True when the traversal may still enter this region.
    pub fn is_explorable(&self) -> bool {
        self.is_accessible() && self.is_unvisited()
    }
}

/// Square map of regions, indexed as `regions[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cave {
    regions: Vec<Vec<Region>>,
    size: usize,
}

impl Cave {
    /// Build a cave from explicit obstruction flags, one `Vec` per row.
    ///
    /// Fails with [`CaveError::InvalidInput`] when there are no rows or when
    /// any row length differs from the number of rows.
    pub fn from_layout(rows: &[Vec<bool>]) -> Result<Self, CaveError> {
        let size = rows.len();
        if size == 0 {
            return Err(CaveError::InvalidInput(
                "cave layout has no rows".to_string(),
            ));
        }

        let mut regions = Vec::with_capacity(size);
        for (row, flags) in rows.iter().enumerate() {
            if flags.len() != size {
                return Err(CaveError::InvalidInput(format!(
                    "row {} has {} regions, expected {}",
                    row,
                    flags.len(),
                    size
                )));
            }
            let strip = flags
                .iter()
                .enumerate()
                .map(|(col, &obstructed)| Region::new(Position::new(row, col), obstructed))
                .collect();
            regions.push(strip);
        }

        Ok(Self { regions, size })
    }

    /// An N×N cave with no obstructions.
    pub fn open(size: usize) -> Result<Self, CaveError> {
        if size == 0 {
            return Err(CaveError::InvalidArgument(
                "cave size must be positive".to_string(),
            ));
        }
        Self::from_layout(&vec![vec![false; size]; size])
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row N-1; reaching it means the cave has been crossed.
    pub fn exit_row(&self) -> usize {
        self.size - 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn region(&self, pos: Position) -> Option<&Region> {
        self.regions.get(pos.row).and_then(|strip| strip.get(pos.col))
    }

    /// Out-of-bounds positions are never accessible.
    pub fn is_accessible(&self, pos: Position) -> bool {
        self.region(pos).is_some_and(Region::is_accessible)
    }

    pub fn is_unvisited(&self, pos: Position) -> bool {
        self.region(pos).is_some_and(Region::is_unvisited)
    }

    pub fn is_explorable(&self, pos: Position) -> bool {
        self.region(pos).is_some_and(Region::is_explorable)
    }

    /// Mark a region as visited. Out-of-bounds positions are ignored.
    pub fn mark_visited(&mut self, pos: Position) {
        if let Some(region) = self
            .regions
            .get_mut(pos.row)
            .and_then(|strip| strip.get_mut(pos.col))
        {
            region.visited = true;
        }
    }

    /// In-bounds neighbours in the order North, East, West, South.
    ///
    /// The traversal pushes them in this order, so South is popped first.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);

        if pos.row >= 1 {
            neighbors.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col + 1 < self.size {
            neighbors.push(Position::new(pos.row, pos.col + 1));
        }
        if pos.col >= 1 {
            neighbors.push(Position::new(pos.row, pos.col - 1));
        }
        if pos.row + 1 < self.size {
            neighbors.push(Position::new(pos.row + 1, pos.col));
        }

        neighbors
    }

    /// Positions of the entry row, left to right.
    pub fn entry_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).map(|col| Position::new(ENTRY_ROW, col))
    }

    /// Clear every visited flag. Obstructions are left untouched.
    pub fn reset(&mut self) {
        for region in self.regions.iter_mut().flatten() {
            region.visited = false;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.regions
            .iter()
            .flatten()
            .filter(|region| !region.is_unvisited())
            .count()
    }

    pub fn obstructed_count(&self) -> usize {
        self.regions
            .iter()
            .flatten()
            .filter(|region| region.is_obstructed())
            .count()
    }

    pub fn visited_positions(&self) -> Vec<Position> {
        self.regions
            .iter()
            .flatten()
            .filter(|region| !region.is_unvisited())
            .map(Region::position)
            .collect()
    }

    /// Display map of the last traversal: `1` for an unvisited region,
    /// `0` for a visited one, space separated, one row per line.
    pub fn render_paths(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size * 2 + 1));
        for strip in &self.regions {
            let line: Vec<&str> = strip
                .iter()
                .map(|region| if region.is_unvisited() { "1" } else { "0" })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
