use clap::{arg, Arg, ArgMatches};
use std::path::{Path, PathBuf};

use crate::config::{Config, KeyEncoding, SourceKind};
use crate::error::ConfigError;
use crate::time_source::TimeSource;
use crate::totp::Totp;

pub mod code;
pub mod vector;
pub mod watch;

pub enum CommandType {
    Code,
    Watch,
    Vector,
}

impl CommandType {
    pub fn as_str(&self) -> &str {
        match self {
            CommandType::Code => "code",
            CommandType::Watch => "watch",
            CommandType::Vector => "vector",
        }
    }
}

pub fn key_args() -> Vec<Arg<'static>> {
    vec![
        arg!(-c --config <PATH> "Config file (default ~/.otp-token/config.toml)").required(false),
        arg!(-k --key <KEY> "Secret key, base32 unless --raw is given").required(false),
        arg!(--raw "Use the key's bytes as they are"),
    ]
}

pub fn source_args() -> Vec<Arg<'static>> {
    vec![
        arg!(-s --step <SECONDS> "Time step in seconds")
            .required(false)
            .validator(|s| s.parse::<u64>()),
        arg!(--source <SOURCE> "Where elapsed seconds come from")
            .required(false)
            .possible_values(SourceKind::NAMES),
        arg!(--seconds <SECONDS> "Fixed elapsed seconds, implies --source fixed")
            .required(false)
            .allow_hyphen_values(true),
        arg!(--rtc <PATH> "RTC since_epoch file for the hardware source").required(false),
    ]
}

pub fn load_config(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut config = Config::load(args.value_of("config").map(Path::new))?;

    if let Some(key) = args.value_of("key") {
        config.key = Some(String::from(key));
    }
    if args.is_present("raw") {
        config.encoding = KeyEncoding::Raw;
    }

    Ok(config)
}

pub fn apply_source_args(config: &mut Config, args: &ArgMatches) -> Result<(), ConfigError> {
    if let Some(step) = args.value_of("step") {
        let step = step.parse::<u64>().map_err(|_| ConfigError::InvalidTimeStep)?;
        config.time_step = Some(step);
    }
    if let Some(source) = args.value_of("source").and_then(SourceKind::from_name) {
        config.source = source;
    }
    if let Some(seconds) = args.value_of("seconds") {
        let seconds = seconds
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidSeconds(String::from(seconds)))?;
        config.seconds = Some(seconds);
        config.source = SourceKind::Fixed;
    }
    if let Some(rtc) = args.value_of("rtc") {
        config.rtc = Some(PathBuf::from(rtc));
    }

    Ok(())
}

pub fn build_totp(args: &ArgMatches) -> Result<Totp<Box<dyn TimeSource>>, ConfigError> {
    let mut config = load_config(args)?;
    apply_source_args(&mut config, args)?;
    config.build()
}
