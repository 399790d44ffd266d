pub mod calculator;
pub mod entry;
pub mod export;
pub mod log;
pub mod statistics;

pub use entry::DayEntryService;
pub use statistics::StatisticsService;
