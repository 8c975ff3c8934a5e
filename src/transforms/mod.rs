// ============================================================================
// Transforms Module
// Ready-made transforms, one per call shape
// ============================================================================

mod calendar;
mod rounding;
mod unix_timestamp;

pub use calendar::{ToDayNum, ToSecond};
pub use rounding::{ToStartOfInterval, ToStartOfSecond};
pub use unix_timestamp::ToUnixTimestamp;
