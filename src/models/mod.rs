pub mod clock_event;
pub mod company;
pub mod day_balance;
pub mod employee;
pub mod site_tag;
