//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation (rejected before any side effect)
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("Employee {employee_id} not found in company {company_id}")]
    EmployeeNotFound { employee_id: i64, company_id: i64 },

    #[error("Company {0} not found")]
    CompanyNotFound(i64),

    // ---------------------------
    // Closing
    // ---------------------------
    #[error("Day {day} already closed for employee {employee_id}")]
    AlreadyClosed { employee_id: i64, day: NaiveDate },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Missing employee or company. Non-retriable; a batch run skips and
    /// moves on.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::EmployeeNotFound { .. } | AppError::CompanyNotFound(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
