use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::balance::BalanceService;
use crate::core::store::BalanceStore;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date::{parse_day, today};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance {
        employee,
        company,
        day,
        json,
    } = cmd
    {
        let day = match day {
            Some(s) => parse_day(s)?,
            None => today(),
        };

        let store = SqliteStore::open(&cfg.database)?;
        let service = BalanceService {
            employees: &store,
            events: &store,
        };

        let balance = service.daily_balance(*employee, *company, day)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&balance)?);
        } else {
            let running = store.running_balance(*employee)?;

            println!("\n=== Employee {} on {} ===", employee, day);
            println!(
                "Worked: {} min | Expected: {} min | Balance: {}",
                balance.worked_minutes,
                balance.expected_minutes,
                format_minutes(balance.balance_minutes),
            );
            println!("Running balance: {}", format_minutes(running));
            if balance.dangling_event {
                warning("Odd event count: the trailing event was ignored.");
            }
        }
    }
    Ok(())
}
