pub mod day_entry;
pub mod period;
pub mod statistics;
