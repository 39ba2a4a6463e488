use std::collections::HashMap;

use log::{debug, info, warn};

use crate::error::parsing::ParsingError;
use crate::model::grid::{CellContent, Grid};
use crate::model::schedule::{ScheduleRecord, SlotTime, Weekday};

/// Turns a located timetable grid into one record per registration id.
///
/// Rows are scanned top to bottom and each row's slots left to right. A slot
/// spanning `n` rows reserves its column in the `n - 1` rows below it, so the
/// slots of those rows land on the weekday they are drawn under. The grid
/// itself is never modified.
pub fn extract(grid: Option<&Grid>) -> Result<Vec<ScheduleRecord>, ParsingError> {
    let grid = grid.ok_or(ParsingError::TableNotFound)?;
    if grid.header().is_none() {
        return Err(ParsingError::MissingHeader);
    }

    let mut records: Vec<ScheduleRecord> = Vec::new();
    let mut by_id: HashMap<String, usize> = HashMap::new();
    // column -> last data row covered by an earlier span
    let mut reserved: HashMap<usize, usize> = HashMap::new();

    for (row_index, row) in grid.data_rows().iter().enumerate() {
        debug!(
            "row {}: {} label cell(s), {} slot(s)",
            row_index + 1,
            row.label_offset(),
            row.data_cells().count()
        );
        let mut column = 0;

        for cell in row.data_cells() {
            while reserved.get(&column).is_some_and(|&last| last >= row_index) {
                column += 1;
            }
            let cell_column = column;
            column += 1;

            if cell.is_empty() {
                continue;
            }

            if cell.span > 1 {
                reserved.insert(cell_column, row_index.saturating_add(cell.span - 1));
            }

            let Some(weekday) = Weekday::from_column(cell_column) else {
                warn!(
                    "skipping slot in row {} beyond the last weekday column ({})",
                    row_index + 1,
                    cell_column
                );
                continue;
            };

            let content = CellContent::parse(&cell.text);
            let index = match by_id.get(&content.registration_id) {
                Some(&index) => index,
                None => {
                    let (start, end) = content.times();
                    debug!(
                        "new course {} ({}) on {}",
                        content.course, content.registration_id, weekday
                    );
                    records.push(ScheduleRecord {
                        course: content.course,
                        registration_id: content.registration_id.clone(),
                        start: SlotTime::new(weekday, &start),
                        end: SlotTime::new(weekday, &end),
                        location: content.location,
                        days: Vec::new(),
                    });
                    by_id.insert(content.registration_id, records.len() - 1);
                    records.len() - 1
                }
            };

            let days = &mut records[index].days;
            if !days.contains(&weekday) {
                days.push(weekday);
            }
        }
    }

    info!(
        "extracted {} course(s) from {} data row(s)",
        records.len(),
        grid.data_rows().len()
    );
    Ok(records)
}
