//! Helpers shared by the puzzle solutions

pub mod geometry;
pub mod grid;
pub mod path_search;
