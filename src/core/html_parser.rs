use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Node, Selector};

use crate::core::extractor;
use crate::error::parsing::ParsingError;
use crate::model::grid::{Cell, CellKind, Grid, Row};
use crate::model::schedule::ScheduleRecord;

/// The weekly schedule table on the student detail schedule page.
pub const DEFAULT_TABLE_SELECTOR: &str =
    r#".datadisplaytable[summary="This layout table is used to present the weekly course schedule."]"#;

/// Largest `rowspan` browsers honor; bigger values are clamped to it.
pub const MAX_ROWSPAN: usize = 65534;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

fn selector(css: &str) -> Result<Selector, ParsingError> {
    Selector::parse(css).map_err(|_| ParsingError::Selector(css.to_string()))
}

/// Finds the first table matching `table_selector` and reads it into a [`Grid`].
///
/// `Ok(None)` means the page has no such table.
pub fn locate_grid(html: &str, table_selector: &str) -> Result<Option<Grid>, ParsingError> {
    let document = Html::parse_document(html);
    let table_selector = selector(table_selector)?;
    let row_selector = selector("tr")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(None);
    };

    let rows = table
        .select(&row_selector)
        .map(|row| {
            let cells = row
                .children()
                .filter_map(ElementRef::wrap)
                .filter_map(read_cell)
                .collect();
            Row::new(cells)
        })
        .collect();

    Ok(Some(Grid::new(rows)))
}

/// Locates the timetable in `html` and extracts its schedule records.
pub fn parse_schedule(html: &str, table_selector: &str) -> Result<Vec<ScheduleRecord>, ParsingError> {
    let grid = locate_grid(html, table_selector)?;
    extractor::extract(grid.as_ref())
}

fn read_cell(element: ElementRef) -> Option<Cell> {
    let kind = match element.value().name() {
        "th" => CellKind::Label,
        "td" => CellKind::Data,
        _ => return None,
    };
    let span = element
        .value()
        .attr("rowspan")
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_ROWSPAN);

    Some(Cell {
        kind,
        text: inner_text(element),
        span,
    })
}

/// Text of an element laid out the way a browser's `innerText` shows it:
/// `<br>` breaks lines, whitespace runs collapse, lines are trimmed.
fn inner_text(element: ElementRef) -> String {
    let mut raw = String::new();

    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(&WHITESPACE.replace_all(text, " ")),
            Node::Element(el) if el.name() == "br" => raw.push('\n'),
            _ => {}
        }
    }

    raw.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
