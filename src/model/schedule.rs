use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Column order of the timetable, one school week.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn from_column(column: usize) -> Option<Weekday> {
        Self::ALL.get(column).copied()
    }

    /// Two-letter day code used in `BYDAY` recurrence parts.
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Monday => "MO",
            Weekday::Tuesday => "TU",
            Weekday::Wednesday => "WE",
            Weekday::Thursday => "TH",
            Weekday::Friday => "FR",
            Weekday::Saturday => "SA",
            Weekday::Sunday => "SU",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A weekday plus the time-of-day text exactly as the grid shows it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SlotTime {
    pub weekday: Weekday,
    pub time: String,
}

impl SlotTime {
    pub fn new(weekday: Weekday, time: &str) -> Self {
        SlotTime {
            weekday,
            time: time.to_string(),
        }
    }

    /// `None` when the text is not a recognizable clock time.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        let compact: String = self
            .time
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        ["%I:%M%p", "%H:%M"]
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(&compact, format).ok())
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.time)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub course: String,
    pub registration_id: String,
    pub start: SlotTime,
    pub end: SlotTime,
    pub location: String,
    /// Scan order, not calendar order.
    pub days: Vec<Weekday>,
}

impl ScheduleRecord {
    /// Weekly recurrence over every day the course meets, e.g. `FREQ=WEEKLY;BYDAY=MO,WE`.
    pub fn recurrence_rule(&self) -> String {
        let days = self
            .days
            .iter()
            .map(|day| day.code())
            .collect::<Vec<_>>()
            .join(",");
        format!("FREQ=WEEKLY;BYDAY={}", days)
    }
}
