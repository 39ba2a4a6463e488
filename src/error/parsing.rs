use thiserror::Error;

/// The one way extraction can fail: the grid is missing or has no usable shape.
///
/// Malformed individual cells never produce this error, they degrade into
/// best-effort records instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    #[error("Failed to parse timetable data: timetable not found")]
    TableNotFound,

    #[error("Failed to parse timetable data: timetable has no header row")]
    MissingHeader,

    #[error("Failed to parse timetable data: invalid selector `{0}`")]
    Selector(String),
}
