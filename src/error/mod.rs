pub mod parsing;
pub mod schedule;
