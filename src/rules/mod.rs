//! Go rules needed by the board: groups, liberties and captures

pub mod capture;

pub use capture::{dead_neighbors, group, liberties};
