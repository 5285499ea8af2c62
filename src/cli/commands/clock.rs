use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder::Recorder;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clock {
        employee,
        company,
        lat,
        lon,
        at,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;
        let recorder = Recorder {
            employees: &store,
            companies: &store,
            events: &store,
        };

        let event = match at {
            Some(s) => {
                let ts = parse_timestamp(s)?;
                recorder.record_at(*employee, *company, *lat, *lon, ts)?
            }
            None => recorder.record(*employee, *company, *lat, *lon)?,
        };

        success(format!(
            "Clock event {} recorded for employee {} at {} ({})",
            event.id,
            event.employee_id,
            event.timestamp_str(),
            event.tag.to_db_str(),
        ));
    }
    Ok(())
}
