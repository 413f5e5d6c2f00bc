mod id_generator;
mod logger;
mod time;

pub use id_generator::TradeIdGenerator;
pub use logger::{parse_log_level, setup_logger};
pub use time::current_time_millis;
