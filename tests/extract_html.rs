// tests/extract_html.rs
//
// End-to-end extraction from schedule page HTML.
//
use timetable_grid::core::html_parser::DEFAULT_TABLE_SELECTOR;
use timetable_grid::{parse_schedule, ParsingError, SlotTime, Weekday};

fn page(rows: &str) -> String {
    format!(
        r#"<html><body>
<table class="datadisplaytable" summary="This layout table is used to present the weekly course schedule.">
<caption class="captiontext">Schedule</caption>
{}
</table>
</body></html>"#,
        rows
    )
}

const HEADER: &str = "<tr><th>Time</th><th>Monday</th><th>Tuesday</th><th>Wednesday</th><th>Thursday</th><th>Friday</th></tr>";

#[test]
fn weekly_page_groups_by_registration_id() {
    let html = page(&format!(
        "{HEADER}
<tr><th>8am</th>
  <td rowspan=\"2\"><a href=\"#\">ACCT 201-01</a><br>20103<br>8:00 am-9:15 am<br>BLDG 101</td>
  <td>&nbsp;</td>
  <td rowspan=\"2\"><a href=\"#\">ACCT 201-01</a><br>20103<br>8:00 am-9:15 am<br>BLDG 101</td>
  <td>&nbsp;</td>
  <td>&nbsp;</td>
</tr>
<tr><th>9am</th>
  <td><a href=\"#\">MATH 110-02</a><br>30555<br>9:00 am-9:50 am<br>SCI 12</td>
  <td><a href=\"#\">MATH 110-02</a><br>30555<br>9:00 am-9:50 am<br>SCI 12</td>
  <td>&nbsp;</td>
</tr>"
    ));

    let records = parse_schedule(&html, DEFAULT_TABLE_SELECTOR).unwrap();
    assert_eq!(records.len(), 2);

    let acct = &records[0];
    assert_eq!(acct.course, "ACCT 201-01");
    assert_eq!(acct.registration_id, "20103");
    assert_eq!(acct.start, SlotTime::new(Weekday::Monday, "8:00 am"));
    assert_eq!(acct.end, SlotTime::new(Weekday::Monday, "9:15 am"));
    assert_eq!(acct.location, "BLDG 101");
    assert_eq!(acct.days, vec![Weekday::Monday, Weekday::Wednesday]);
    assert_eq!(acct.recurrence_rule(), "FREQ=WEEKLY;BYDAY=MO,WE");

    // Row 2 lost its Monday and Wednesday cells to the spans above.
    let math = &records[1];
    assert_eq!(math.registration_id, "30555");
    assert_eq!(math.days, vec![Weekday::Tuesday, Weekday::Thursday]);
    assert_eq!(math.start.weekday, Weekday::Tuesday);
}

#[test]
fn header_only_page_is_empty_not_an_error() {
    let records = parse_schedule(&page(HEADER), DEFAULT_TABLE_SELECTOR).unwrap();
    assert!(records.is_empty());
}

#[test]
fn page_without_schedule_table_fails() {
    let html = "<html><body><table class=\"datadisplaytable\"><tr><td>x</td></tr></table></body></html>";
    assert_eq!(
        parse_schedule(html, DEFAULT_TABLE_SELECTOR),
        Err(ParsingError::TableNotFound)
    );
}

#[test]
fn custom_selector_finds_other_tables() {
    let html = "<table id=\"week\"><tr><th>Mon</th></tr><tr><td>BIO<br>7<br>1:00 pm-2:15 pm<br>LAB</td></tr></table>";
    let records = parse_schedule(html, "#week").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].days, vec![Weekday::Monday]);
    assert_eq!(
        records[0].start.time_of_day(),
        chrono::NaiveTime::from_hms_opt(13, 0, 0)
    );
}

#[test]
fn parsing_twice_gives_the_same_records() {
    let html = page(&format!(
        "{HEADER}<tr><th>8am</th><td rowspan=\"3\">A<br>1<br>8:00 am-10:50 am<br>R</td><td>B<br>2<br>8:00 am-8:50 am<br>R</td></tr>\
         <tr><th>9am</th><td>C<br>3<br>9:00 am-9:50 am<br>R</td></tr>\
         <tr><th>10am</th><td>&nbsp;</td><td>D<br>4<br>10:00 am-10:50 am<br>R</td></tr>"
    ));

    let first = parse_schedule(&html, DEFAULT_TABLE_SELECTOR).unwrap();
    let second = parse_schedule(&html, DEFAULT_TABLE_SELECTOR).unwrap();
    assert_eq!(first, second);

    let days: Vec<_> = first.iter().map(|r| (r.registration_id.as_str(), r.days.clone())).collect();
    assert_eq!(
        days,
        vec![
            ("1", vec![Weekday::Monday]),
            ("2", vec![Weekday::Tuesday]),
            ("3", vec![Weekday::Tuesday]),
            ("4", vec![Weekday::Wednesday]),
        ]
    );
}
