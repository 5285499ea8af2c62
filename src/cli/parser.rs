use clap::{Parser, Subcommand};

/// Command-line interface definition for timebank
/// Attendance balance engine: geofenced clock events and banked-hours closing
#[derive(Parser)]
#[command(
    name = "timebank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee attendance engine: geofenced clock events, daily balance closing, banked hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Print the internal log table (batch audit trail, migrations)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage companies (tenants) and their geofences
    Company {
        #[command(subcommand)]
        cmd: CompanyCommands,
    },

    /// Manage the employee roster
    Employee {
        #[command(subcommand)]
        cmd: EmployeeCommands,
    },

    /// Record a clock event for an employee
    Clock {
        /// Employee id
        #[arg(long = "employee")]
        employee: i64,

        /// Company id the employee belongs to
        #[arg(long = "company")]
        company: i64,

        /// Event latitude
        #[arg(long = "lat", allow_hyphen_values = true)]
        lat: f64,

        /// Event longitude
        #[arg(long = "lon", allow_hyphen_values = true)]
        lon: f64,

        /// Explicit instant "YYYY-MM-DD HH:MM[:SS]" (corrections/backfill); default: now
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Compute (without applying) an employee's balance for a day
    Balance {
        #[arg(long = "employee")]
        employee: i64,

        #[arg(long = "company")]
        company: i64,

        /// Day (YYYY-MM-DD); default: today
        #[arg(long = "day")]
        day: Option<String>,

        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Close a day: fold its balance into the running balance (once per day)
    Close {
        /// Employee id (omit with --all)
        #[arg(long = "employee", required_unless_present = "all")]
        employee: Option<i64>,

        /// Company id (omit with --all)
        #[arg(long = "company", required_unless_present = "all")]
        company: Option<i64>,

        /// Day to close (YYYY-MM-DD); default: yesterday
        #[arg(long = "day")]
        day: Option<String>,

        /// Close the day for the entire roster (manual batch run)
        #[arg(long = "all", conflicts_with_all = ["employee", "company"])]
        all: bool,
    },

    /// List an employee's clock events for a day
    List {
        #[arg(long = "employee")]
        employee: i64,

        /// Day (YYYY-MM-DD); default: today
        #[arg(long = "day")]
        day: Option<String>,

        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Run the recurring daily closing scheduler in the foreground
    Run {
        /// Firing time HH:MM (local); default: close_time from config
        #[arg(long = "at")]
        at: Option<String>,

        /// Run one batch for yesterday immediately and exit
        #[arg(long = "once")]
        once: bool,
    },
}

#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Register a company with its geofence
    Add {
        #[arg(long = "name")]
        name: String,

        /// Reference latitude of the company site
        #[arg(long = "lat", allow_hyphen_values = true)]
        lat: f64,

        /// Reference longitude of the company site
        #[arg(long = "lon", allow_hyphen_values = true)]
        lon: f64,

        /// Geofence radius in meters
        #[arg(long = "radius")]
        radius: f64,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Register an employee
    Add {
        /// Company id the employee belongs to
        #[arg(long = "company")]
        company: i64,

        #[arg(long = "name")]
        name: String,

        /// Contractual daily minutes; default from config
        #[arg(long = "expected")]
        expected: Option<i64>,
    },

    /// List the roster with running balances
    List {
        /// Print as JSON
        #[arg(long = "json")]
        json: bool,
    },
}
