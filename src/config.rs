use std::env;

use crate::core::html_parser::DEFAULT_TABLE_SELECTOR;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub table_selector: String,
    pub user_agent: String,
    /// File path or URL of the schedule page.
    pub source: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            source: None,
        }
    }
}

impl Config {
    /// Reads `TIMETABLE_SELECTOR`, `TIMETABLE_USER_AGENT` and `TIMETABLE_SOURCE`,
    /// loading a `.env` file first when one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            table_selector: non_empty("TIMETABLE_SELECTOR").unwrap_or(defaults.table_selector),
            user_agent: non_empty("TIMETABLE_USER_AGENT").unwrap_or(defaults.user_agent),
            source: non_empty("TIMETABLE_SOURCE"),
        }
    }
}
