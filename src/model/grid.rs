use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Row label (`<th>`), never mapped to a weekday.
    Label,
    /// Schedule slot (`<td>`).
    Data,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub text: String,
    pub span: usize,
}

impl Cell {
    pub fn label(text: &str) -> Self {
        Cell {
            kind: CellKind::Label,
            text: text.to_string(),
            span: 1,
        }
    }

    pub fn data(text: &str) -> Self {
        Cell::spanning(text, 1)
    }

    pub fn empty() -> Self {
        Cell::data("")
    }

    /// A data cell covering `span` rows. Spans below 1 are treated as 1.
    pub fn spanning(text: &str, span: usize) -> Self {
        Cell {
            kind: CellKind::Data,
            text: text.to_string(),
            span: span.max(1),
        }
    }

    /// True when the cell carries no schedule text (whitespace and NBSP only).
    pub fn is_empty(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    pub fn is_label(&self) -> bool {
        self.kind == CellKind::Label
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Number of leading label cells before the first slot of this row.
    pub fn label_offset(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_label()).count()
    }

    pub fn data_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| !cell.is_label())
    }
}

/// A fully materialized timetable table. Row 0 is the header.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// The four text fields of a filled slot, in the order the page renders them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CellContent {
    pub course: String,
    pub registration_id: String,
    pub time_range: String,
    pub location: String,
}

impl CellContent {
    /// Reads the newline separated fields of a cell. Missing fields come back
    /// empty and extra lines are ignored; this never fails.
    pub fn parse(text: &str) -> Self {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string);

        CellContent {
            course: lines.next().unwrap_or_default(),
            registration_id: lines.next().unwrap_or_default(),
            time_range: lines.next().unwrap_or_default(),
            location: lines.next().unwrap_or_default(),
        }
    }

    /// Splits `9:00am-9:50am` into its start and end times.
    pub fn times(&self) -> (String, String) {
        match self.time_range.split_once('-') {
            Some((start, end)) => (start.trim().to_string(), end.trim().to_string()),
            None => (self.time_range.trim().to_string(), String::new()),
        }
    }
}
