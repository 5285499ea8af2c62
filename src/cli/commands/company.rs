use crate::cli::parser::{Commands, CompanyCommands};
use crate::config::Config;
use crate::core::geofence::Coord;
use crate::db::pool::DbPool;
use crate::db::queries::insert_company;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Company { cmd } = cmd {
        match cmd {
            CompanyCommands::Add {
                name,
                lat,
                lon,
                radius,
            } => {
                if !Coord::new(*lat, *lon).in_range() {
                    return Err(AppError::InvalidCoordinate(format!(
                        "lat={lat}, lon={lon}"
                    )));
                }
                if *radius < 0.0 {
                    return Err(AppError::InvalidCoordinate(format!(
                        "negative geofence radius: {radius}"
                    )));
                }

                let pool = DbPool::new(&cfg.database)?;
                let id = insert_company(&pool.conn, name, *lat, *lon, *radius)?;

                success(format!(
                    "Company '{}' created with id {} (geofence {:.0} m around {:.5},{:.5})",
                    name, id, radius, lat, lon
                ));
            }
        }
    }
    Ok(())
}
