// ============================================================================
// toUnixTimestamp
// Whole seconds since the epoch
// ============================================================================

use crate::interfaces::{Absent, Execute, Transform};

/// Seconds since the epoch, rounded toward negative infinity.
///
/// Whole-only transform: the adapter floors the timestamp before the call,
/// so the implementation is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToUnixTimestamp;

impl Transform for ToUnixTimestamp {
    const NAME: &'static str = "toUnixTimestamp";
    type Scaled = Absent;
    type Components = Absent;
}

impl Execute<i64> for ToUnixTimestamp {
    type Output = i64;

    #[inline]
    fn execute(&self, seconds: i64, _args: ()) -> i64 {
        seconds
    }
}

/// DateTime columns already hold seconds.
impl Execute<u32> for ToUnixTimestamp {
    type Output = i64;

    #[inline]
    fn execute(&self, seconds: u32, _args: ()) -> i64 {
        seconds as i64
    }
}
