use crate::cli::commands::close::audit_batch;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::run_daily_closing;
use crate::core::scheduler::Scheduler;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::yesterday;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { at, once } = cmd {
        if *once {
            // Operational escape hatch: one batch for yesterday, no timer.
            run_batch(&cfg.database, yesterday());
            return Ok(());
        }

        let at = at.as_deref().unwrap_or(cfg.close_time.as_str());
        let fire_at = parse_time(at).ok_or_else(|| AppError::InvalidTime(at.to_string()))?;

        messages::info(format!(
            "Scheduler started: daily closing fires at {} local time. Ctrl+C to stop.",
            fire_at.format("%H:%M"),
        ));

        let db_path = cfg.database.clone();
        let handle = Scheduler::start(fire_at, move |day| run_batch(&db_path, day));

        // Foreground daemon: block until the process is torn down.
        handle.wait();
    }
    Ok(())
}

/// One isolated batch run. Every error ends up on the console and (when the
/// store is reachable) in the internal log; nothing propagates to the timer.
fn run_batch(db_path: &str, day: NaiveDate) {
    let store = match SqliteStore::open(db_path) {
        Ok(s) => s,
        Err(e) => {
            messages::error(format!("Cannot open store for batch run: {}", e));
            return;
        }
    };

    match run_daily_closing(&store, day) {
        Ok(outcome) => {
            if let Err(e) = audit_batch(store.conn(), &outcome) {
                messages::warning(format!("Failed to write batch audit log: {}", e));
            }
        }
        Err(e) => messages::error(format!("Batch run for {} failed: {}", day, e)),
    }
}
