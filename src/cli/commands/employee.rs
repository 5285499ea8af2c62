use crate::cli::parser::{Commands, EmployeeCommands};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{find_company, insert_employee, list_employees};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { cmd } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match cmd {
            EmployeeCommands::Add {
                company,
                name,
                expected,
            } => {
                // The company must exist; an employee without a geofence to
                // classify against is useless.
                find_company(&pool.conn, *company)?;

                let expected = expected.unwrap_or(cfg.default_expected_minutes);
                let id = insert_employee(&pool.conn, *company, name, expected)?;

                success(format!(
                    "Employee '{}' created with id {} in company {} (expected {} min/day)",
                    name, id, company, expected
                ));
            }

            EmployeeCommands::List { json } => {
                let roster = list_employees(&pool.conn)?;

                if *json {
                    println!("{}", serde_json::to_string_pretty(&roster)?);
                } else if roster.is_empty() {
                    println!("No employees registered.");
                } else {
                    println!("ROSTER:");
                    for e in &roster {
                        println!(
                            "- id={} company={} name={} expected={} balance={}",
                            e.id,
                            e.company_id,
                            e.name,
                            e.expected_daily_minutes,
                            format_minutes(e.balance_minutes),
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
