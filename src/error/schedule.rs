use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct ScheduleError {
    pub message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ScheduleError {
    pub fn new(message: &str) -> Self {
        ScheduleError {
            message: message.to_string(),
            source: None,
        }
    }

    /// The wrapped error, if this one was converted from another.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleError: {}", self.message)
    }
}

// Any std error converts, so `?` works on io, reqwest and ParsingError alike.
impl<E: StdError + Send + Sync + 'static> From<E> for ScheduleError {
    fn from(err: E) -> Self {
        ScheduleError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
