use anyhow::anyhow;
use timetable_grid::config::Config;
use timetable_grid::core::fetch::load_source;
use timetable_grid::core::html_parser::parse_schedule;
use timetable_grid::utils::input::input;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    tracing_subscriber::fmt::init();

    let mut rrule = false;
    let mut source = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--rrule" => rrule = true,
            _ => source = Some(arg),
        }
    }

    let source = match source.or_else(|| config.source.clone()) {
        Some(source) => source,
        None => input("Schedule page (file path or URL):")?,
    };
    if source.is_empty() {
        return Err(anyhow!("no schedule source given"));
    }

    let html = load_source(&config, &source)
        .await
        .map_err(|err| anyhow!("{}", err))?;
    let records = parse_schedule(&html, &config.table_selector)?;
    log::info!("found {} course(s) in {}", records.len(), source);

    println!("{}", serde_json::to_string_pretty(&records)?);
    if rrule {
        for record in &records {
            println!("{}: RRULE:{}", record.registration_id, record.recurrence_rule());
        }
    }
    Ok(())
}
