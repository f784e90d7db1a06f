use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::rtc::SysfsRtc;
use crate::secret::Secret;
use crate::time_source::{
    FixedCounter, HardwareAnchoredElapsed, TimeSource, UnixTime, WallClockElapsed,
};
use crate::totp::{TimeStep, Totp};
use crate::utils::decode_key;

const DIR_NAME: &str = ".otp-token";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEncoding {
    Base32,
    Raw,
}

impl Default for KeyEncoding {
    fn default() -> Self {
        KeyEncoding::Base32
    }
}

/// Which clock the counter is derived from. One per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Seconds since the process started.
    Elapsed,
    /// Seconds since the hardware clock was first read.
    Hardware,
    /// Seconds since the Unix epoch.
    Unix,
    Fixed,
}

impl SourceKind {
    pub const NAMES: [&'static str; 4] = ["elapsed", "hardware", "unix", "fixed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Elapsed => "elapsed",
            SourceKind::Hardware => "hardware",
            SourceKind::Unix => "unix",
            SourceKind::Fixed => "fixed",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "elapsed" => Some(SourceKind::Elapsed),
            "hardware" => Some(SourceKind::Hardware),
            "unix" => Some(SourceKind::Unix),
            "fixed" => Some(SourceKind::Fixed),
            _ => None,
        }
    }
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Elapsed
    }
}

// No Debug: the key must never end up in a log line
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub key: Option<String>,
    pub encoding: KeyEncoding,
    pub time_step: Option<u64>,
    pub source: SourceKind,
    pub seconds: Option<i64>,
    pub rtc: Option<PathBuf>,
}

pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DIR_NAME).join(FILE_NAME))
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads `path`, or the default location if there is a file there.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Config::read(path),
            None => match default_path() {
                Some(path) if path.exists() => Config::read(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Config::from_toml(&contents)
    }

    pub fn secret(&self) -> Result<Secret, ConfigError> {
        let key = self.key.as_deref().ok_or(ConfigError::MissingKey)?;
        decode_key(key, self.encoding)
    }

    pub fn time_step(&self) -> Result<TimeStep, ConfigError> {
        let seconds = self.time_step.unwrap_or(TimeStep::DEFAULT_SECONDS);
        TimeStep::new(seconds).ok_or(ConfigError::InvalidTimeStep)
    }

    pub fn time_source(&self) -> Result<Box<dyn TimeSource>, ConfigError> {
        let source: Box<dyn TimeSource> = match self.source {
            SourceKind::Elapsed => Box::new(WallClockElapsed::new()),
            SourceKind::Unix => Box::new(UnixTime),
            SourceKind::Fixed => {
                let seconds = self.seconds.ok_or(ConfigError::MissingSeconds)?;
                Box::new(FixedCounter::new(seconds))
            }
            SourceKind::Hardware => {
                let rtc = self.rtc.as_ref().map(SysfsRtc::new).unwrap_or_default();
                Box::new(HardwareAnchoredElapsed::new(rtc)?)
            }
        };
        Ok(source)
    }

    pub fn build(&self) -> Result<Totp<Box<dyn TimeSource>>, ConfigError> {
        let secret = self.secret()?;
        let step = self.time_step()?;
        let source = self.time_source()?;
        info!(
            "{} time source, {}s time step",
            self.source.as_str(),
            step.seconds()
        );

        Ok(Totp::new(secret, step, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClockError;
    use crate::tests::constants::*;
    use secrecy::ExposeSecret;

    #[test]
    fn parses_a_full_config() {
        let config = Config::from_toml(
            r#"
            key = "12345678901234567890"
            encoding = "raw"
            time_step = 60
            source = "hardware"
            rtc = "/sys/class/rtc/rtc1/since_epoch"
            "#,
        )
        .unwrap();

        assert_eq!(config.secret().unwrap().expose_secret(), RFC_SECRET);
        assert_eq!(config.time_step().unwrap().seconds(), 60);
        assert_eq!(config.source, SourceKind::Hardware);
        assert_eq!(
            config.rtc.as_deref(),
            Some(Path::new("/sys/class/rtc/rtc1/since_epoch"))
        );
    }

    #[test]
    fn fills_in_defaults() {
        let config = Config::from_toml(&format!("key = \"{}\"", RFC_SECRET_BASE32)).unwrap();

        assert_eq!(config.encoding, KeyEncoding::Base32);
        assert_eq!(config.source, SourceKind::Elapsed);
        assert_eq!(config.time_step().unwrap(), TimeStep::default());
        assert_eq!(config.secret().unwrap().expose_secret(), RFC_SECRET);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            Config::from_toml("secret = \"abc\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn rejects_zero_time_step() {
        let config = Config::from_toml("time_step = 0").unwrap();

        assert!(matches!(
            config.time_step(),
            Err(ConfigError::InvalidTimeStep)
        ));
    }

    #[test]
    fn requires_a_key() {
        assert!(matches!(
            Config::default().secret(),
            Err(ConfigError::MissingKey)
        ));
    }

    #[test]
    fn fixed_source_needs_seconds() {
        let config = Config::from_toml("source = \"fixed\"").unwrap();

        assert!(matches!(
            config.time_source(),
            Err(ConfigError::MissingSeconds)
        ));
    }

    #[test]
    fn builds_a_fixed_generator() {
        let config = Config::from_toml(&format!(
            "key = \"{}\"\nsource = \"fixed\"\nseconds = 59",
            RFC_SECRET_BASE32
        ))
        .unwrap();
        let token = config.build().unwrap().generate().unwrap();

        assert_eq!(token.to_string(), "287082");
    }

    #[test]
    fn missing_rtc_is_unavailable() {
        let config = Config::from_toml(
            "source = \"hardware\"\nrtc = \"/nonexistent/rtc9/since_epoch\"",
        )
        .unwrap();

        assert!(matches!(
            config.time_source(),
            Err(ConfigError::Clock(ClockError::Unavailable(_)))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("/nonexistent/otp-token.toml")));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn source_names_round_trip() {
        for name in SourceKind::NAMES {
            assert_eq!(SourceKind::from_name(name).unwrap().as_str(), name);
        }
        assert_eq!(SourceKind::from_name("ntp"), None);
    }
}
