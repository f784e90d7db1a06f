use std::fmt;
use std::num::NonZeroU64;

use secrecy::ExposeSecret;

use crate::error::{ClockError, OtpError};
use crate::hotp::{format_code, get_hotp};
use crate::secret::Secret;
use crate::time_source::TimeSource;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// HOTP where the moving factor is a number of whole time steps

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStep(NonZeroU64);

impl TimeStep {
    pub const DEFAULT_SECONDS: u64 = 30;

    pub fn new(seconds: u64) -> Option<Self> {
        NonZeroU64::new(seconds).map(TimeStep)
    }

    pub fn seconds(&self) -> u64 {
        self.0.get()
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep(NonZeroU64::new(TimeStep::DEFAULT_SECONDS).unwrap_or(NonZeroU64::MIN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub counter: u64,
    /// Seconds until the counter moves on.
    pub remaining: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub code: u32,
    pub counter: u64,
    pub remaining: u64,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_code(self.code))
    }
}

pub fn get_moving_factor(elapsed: i64, step: TimeStep) -> Result<u64, ClockError> {
    get_window(elapsed, step).map(|w| w.counter)
}

fn get_window(elapsed: i64, step: TimeStep) -> Result<Window, ClockError> {
    let secs = u64::try_from(elapsed).map_err(|_| ClockError::NegativeElapsedTime(elapsed))?;

    Ok(Window {
        counter: secs / step.seconds(),
        remaining: step.seconds() - secs % step.seconds(),
    })
}

/// Time-stepped codes for one secret, driven by any [`TimeSource`].
pub struct Totp<S> {
    secret: Secret,
    step: TimeStep,
    source: S,
}

impl<S: TimeSource> Totp<S> {
    pub fn new(secret: Secret, step: TimeStep, source: S) -> Self {
        Totp {
            secret,
            step,
            source,
        }
    }

    pub fn window(&self) -> Result<Window, OtpError> {
        let elapsed = self.source.now()?;
        let window = get_window(elapsed, self.step)?;
        debug!(
            "counter {} ({}s left in window)",
            window.counter, window.remaining
        );
        Ok(window)
    }

    pub fn at(&self, counter: u64) -> Result<u32, OtpError> {
        Ok(get_hotp(self.secret.expose_secret(), counter)?)
    }

    pub fn generate(&self) -> Result<Token, OtpError> {
        let Window { counter, remaining } = self.window()?;

        Ok(Token {
            code: self.at(counter)?,
            counter,
            remaining,
        })
    }
}
