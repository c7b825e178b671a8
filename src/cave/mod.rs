//! Cave grid model: regions, obstruction flags and visited tracking.

mod generation;
mod types;

pub use generation::generate_cave;
pub use types::*;

#[cfg(test)]
pub(crate) mod test_support {
    use super::Cave;

    /// Build a cave from rows of `'.'` (free) and `'#'` (obstructed).
    pub(crate) fn cave_from(layout: &[&str]) -> Cave {
        let rows: Vec<Vec<bool>> = layout
            .iter()
            .map(|row| row.chars().map(|ch| ch == '#').collect())
            .collect();
        Cave::from_layout(&rows).unwrap()
    }
}
