//! Reachability search from the entry row to the exit row.

mod logic;
mod types;

pub use logic::{attempt_traverse, Traversal};
pub use types::*;
