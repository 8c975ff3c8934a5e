// ============================================================================
// Calendar Field Transforms
// Second-of-minute and day number, computed from floored whole seconds
// ============================================================================

use crate::interfaces::{Absent, Execute, Extended, Transform};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_DAY: i64 = 86_400;

// ============================================================================
// toSecond
// ============================================================================

/// Second of the minute, 0 - 59, in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToSecond;

impl Transform for ToSecond {
    const NAME: &'static str = "toSecond";
    type Scaled = Absent;
    type Components = Absent;
}

impl Execute<i64> for ToSecond {
    type Output = u8;

    #[inline]
    fn execute(&self, seconds: i64, _args: ()) -> u8 {
        seconds.rem_euclid(SECONDS_PER_MINUTE) as u8
    }
}

impl Execute<u32> for ToSecond {
    type Output = u8;

    #[inline]
    fn execute(&self, seconds: u32, _args: ()) -> u8 {
        (seconds % SECONDS_PER_MINUTE as u32) as u8
    }
}

// ============================================================================
// toDayNum
// ============================================================================

/// Days since 1970-01-01.
///
/// The standard result is a 16-bit day number; values outside
/// 1970 - 2149 wrap. The extended result is a signed 32-bit day number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToDayNum;

impl ToDayNum {
    #[inline]
    fn days(seconds: i64) -> i64 {
        seconds.div_euclid(SECONDS_PER_DAY)
    }
}

impl Transform for ToDayNum {
    const NAME: &'static str = "toDayNum";
    type Scaled = Absent;
    type Components = Absent;
}

impl Execute<i64> for ToDayNum {
    type Output = u16;

    #[inline]
    fn execute(&self, seconds: i64, _args: ()) -> u16 {
        Self::days(seconds) as u16
    }
}

impl Execute<i64, (), Extended> for ToDayNum {
    type Output = i32;

    #[inline]
    fn execute(&self, seconds: i64, _args: ()) -> i32 {
        Self::days(seconds) as i32
    }
}

/// Date columns are already day numbers.
impl Execute<u16> for ToDayNum {
    type Output = u16;

    #[inline]
    fn execute(&self, day: u16, _args: ()) -> u16 {
        day
    }
}

impl Execute<i32, (), Extended> for ToDayNum {
    type Output = i32;

    #[inline]
    fn execute(&self, day: i32, _args: ()) -> i32 {
        day
    }
}

impl Execute<u32> for ToDayNum {
    type Output = u16;

    #[inline]
    fn execute(&self, seconds: u32, _args: ()) -> u16 {
        Self::days(seconds as i64) as u16
    }
}
