//! Keep track of time, even on the web.

pub use web_time::{Duration, Instant};
