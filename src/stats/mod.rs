mod engine;
mod result;
mod timing;

pub use engine::{StatsEngine, StatsOptions};
pub use result::{FailedTestDetail, StatsResult, percentage};
pub use timing::{Elapsed, TIMESTAMP_FORMAT, elapsed, parse_timestamp};
