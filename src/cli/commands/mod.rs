pub mod balance;
pub mod clock;
pub mod close;
pub mod company;
pub mod config;
pub mod employee;
pub mod init;
pub mod list;
pub mod log;
pub mod run;
