pub mod grid;
pub mod schedule;
