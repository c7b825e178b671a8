//! Speleo - cave crossing simulator library
//!
//! A cave is a square grid of regions, each obstructed or accessible. This
//! crate decides whether a path leads from the top row to the bottom row and
//! estimates, by sampling random caves, how likely such a path is for a given
//! per-region accessibility.

pub mod cave;
pub mod console;
pub mod error;
pub mod simulator;
pub mod traversal;
