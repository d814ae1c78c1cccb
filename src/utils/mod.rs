mod time;

mod tests;

pub use time::current_time_nanos;
