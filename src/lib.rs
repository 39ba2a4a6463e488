pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod utils;

pub use crate::core::extractor::extract;
pub use crate::core::html_parser::{locate_grid, parse_schedule};
pub use crate::error::parsing::ParsingError;
pub use crate::model::grid::{Cell, CellKind, Grid, Row};
pub use crate::model::schedule::{ScheduleRecord, SlotTime, Weekday};
