use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_day;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEvent;
use crate::utils::date::{parse_day, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        employee,
        day,
        json,
    } = cmd
    {
        let day = match day {
            Some(s) => parse_day(s)?,
            None => today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let events = load_events_for_day(&pool.conn, *employee, day)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&events)?);
        } else if events.is_empty() {
            println!("No events for employee {} on {}", employee, day);
        } else {
            print_events(&events);
        }
    }
    Ok(())
}

fn print_events(events: &[ClockEvent]) {
    println!("EVENTS:");
    for (i, ev) in events.iter().enumerate() {
        // Even index = clock-in, odd = clock-out, by pairing order.
        let kind = if i % 2 == 0 { "in " } else { "out" };
        println!(
            "- {} | {} | {} | {:.5},{:.5}",
            ev.timestamp_str(),
            kind,
            ev.tag.to_db_str(),
            ev.latitude,
            ev.longitude,
        );
    }
}
