use anyhow::Result;
use clap::{arg, command, ArgMatches, Command};
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

use super::{build_totp, key_args, source_args, CommandType};
use crate::error::{ClockError, OtpError};
use crate::time_source::TimeSource;
use crate::totp::Totp;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Watch.as_str())
        .about("Print a new code each time the counter window changes")
        .args(key_args())
        .args(source_args())
        .args(&[
            arg!(-i --interval <SECONDS> "Seconds between clock polls")
                .required(false)
                .default_value("1")
                .validator(|s| s.parse::<u64>()),
            arg!(-n --count <WINDOWS> "Stop after printing this many codes")
                .required(false)
                .validator(|s| s.parse::<NonZeroUsize>()),
        ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub interval: Duration,
    pub count: Option<NonZeroUsize>,
}

impl WatchOptions {
    pub fn from_args(watch_args: &ArgMatches) -> Result<Self> {
        let interval = watch_args.value_of_t::<u64>("interval")?;
        let count = match watch_args.value_of("count") {
            Some(_) => Some(watch_args.value_of_t::<NonZeroUsize>("count")?),
            None => None,
        };

        Ok(WatchOptions {
            interval: Duration::from_secs(interval),
            count,
        })
    }
}

pub fn run_watch<W>(watch_args: &ArgMatches, writer: &mut W) -> Result<()>
where
    W: OutErr,
{
    let options = WatchOptions::from_args(watch_args)?;
    let totp = build_totp(watch_args)?;
    watch(&totp, &options, writer)?;
    Ok(())
}

/// Polls `totp` until `options.count` codes have been printed, or forever.
///
/// Failed clock reads are logged and retried on the next poll. Every other
/// error ends the loop: printing a code for a window that cannot be trusted
/// is worse than printing nothing.
pub fn watch<S, W>(totp: &Totp<S>, options: &WatchOptions, writer: &mut W) -> Result<(), OtpError>
where
    S: TimeSource,
    W: OutErr,
{
    let mut last_counter = None;
    let mut printed = 0;

    loop {
        match totp.generate() {
            Ok(token) if last_counter != Some(token.counter) => {
                last_counter = Some(token.counter);
                writer.write(&format!("{} ({}s left)\n", token, token.remaining));

                printed += 1;
                if options.count.map_or(false, |n| printed >= n.get()) {
                    return Ok(());
                }
            }
            Ok(_) => (),
            Err(OtpError::Clock(ClockError::ReadError(e))) => {
                warn!("clock read failed, retrying: {}", e);
            }
            Err(e) => return Err(e),
        }

        thread::sleep(options.interval);
    }
}
