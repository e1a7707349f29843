pub mod clock;
pub mod time_formatter;
pub mod timezone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use time_formatter::{format_instant, truncate_to_millis, FormattedTime, TimeFormatter};
pub use timezone::{resolve as resolve_timezone, DEFAULT_TIMEZONE};
