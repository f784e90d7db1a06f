//! Time-stepped one-time codes (RFC 4226 truncation over a pluggable clock).
//!
//! The code generator in [`hotp`] is a pure function of a secret and a
//! counter. [`totp::Totp`] turns seconds from any [`time_source::TimeSource`]
//! into counters, so the same secret yields the same code whether the
//! seconds come from process uptime, a hardware RTC, the Unix epoch or a
//! fixed test value.

#[macro_use]
extern crate log;

pub mod cmd;
pub mod config;
pub mod error;
pub mod hotp;
pub mod rtc;
pub mod secret;
pub mod time_source;
pub mod totp;
pub mod utils;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use error::{AlgorithmError, ClockError, ConfigError, OtpError};
pub use hotp::get_hotp;
pub use secret::Secret;
pub use time_source::TimeSource;
pub use totp::{TimeStep, Token, Totp};
