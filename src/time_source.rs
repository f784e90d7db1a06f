use std::io::{Error, ErrorKind};
use std::time::{Instant, SystemTime};

use crate::error::ClockError;
use crate::rtc::HardwareClock;

/// Supplies the seconds value a counter is derived from.
///
/// The value is signed so that a clock running backwards shows up as an
/// error downstream instead of wrapping into a plausible counter.
pub trait TimeSource {
    fn now(&self) -> Result<i64, ClockError>;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Result<i64, ClockError> {
        (**self).now()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Box<T> {
    fn now(&self) -> Result<i64, ClockError> {
        (**self).now()
    }
}

/// Seconds elapsed since this value was created, on the monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct WallClockElapsed {
    start: Instant,
}

impl WallClockElapsed {
    pub fn new() -> Self {
        WallClockElapsed::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        WallClockElapsed { start }
    }
}

impl Default for WallClockElapsed {
    fn default() -> Self {
        WallClockElapsed::new()
    }
}

impl TimeSource for WallClockElapsed {
    fn now(&self) -> Result<i64, ClockError> {
        let secs = self.start.elapsed().as_secs();
        Ok(i64::try_from(secs).unwrap_or(i64::MAX))
    }
}

/// Absolute seconds since the Unix epoch (RFC 6238 TOTP).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixTime;

impl TimeSource for UnixTime {
    fn now(&self) -> Result<i64, ClockError> {
        match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since) => Ok(i64::try_from(since.as_secs()).unwrap_or(i64::MAX)),
            Err(before) => {
                let secs = i64::try_from(before.duration().as_secs()).unwrap_or(i64::MAX);
                Err(ClockError::NegativeElapsedTime(-secs.max(1)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCounter(i64);

impl FixedCounter {
    pub fn new(seconds: i64) -> Self {
        FixedCounter(seconds)
    }
}

impl TimeSource for FixedCounter {
    fn now(&self) -> Result<i64, ClockError> {
        Ok(self.0)
    }
}

/// Seconds elapsed since a zero point read once from a hardware clock.
///
/// A value of this type only exists if the zero point was read successfully.
/// Later reads are independent: a failed read is reported and the next call
/// reads the clock again. The zero point itself is never re-read.
#[derive(Debug)]
pub struct HardwareAnchoredElapsed<C> {
    clock: C,
    zero_point: i64,
}

impl<C: HardwareClock> HardwareAnchoredElapsed<C> {
    pub fn new(clock: C) -> Result<Self, ClockError> {
        let zero_point = clock.read_timestamp().map_err(ClockError::Unavailable)?;
        info!("hardware clock zero point captured");

        Ok(HardwareAnchoredElapsed { clock, zero_point })
    }

    pub fn zero_point(&self) -> i64 {
        self.zero_point
    }
}

impl<C: HardwareClock> TimeSource for HardwareAnchoredElapsed<C> {
    fn now(&self) -> Result<i64, ClockError> {
        let reading = self.clock.read_timestamp().map_err(ClockError::ReadError)?;

        if reading < self.zero_point {
            let behind = reading.checked_sub(self.zero_point).unwrap_or(i64::MIN);
            return Err(ClockError::NegativeElapsedTime(behind));
        }

        // only a forward jump past i64::MAX can overflow here
        reading.checked_sub(self.zero_point).ok_or_else(|| {
            ClockError::ReadError(Error::new(
                ErrorKind::InvalidData,
                format!("reading {} is out of range", reading),
            ))
        })
    }
}
