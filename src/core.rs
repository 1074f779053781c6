pub mod clock_time;
pub mod schedule;
pub mod time_range;
