use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    /// The zero point could not be read when the provider was built.
    #[error("clock unavailable: {0}")]
    Unavailable(io::Error),
    #[error("clock read failed: {0}")]
    ReadError(io::Error),
    #[error("elapsed time is negative ({0}s)")]
    NegativeElapsedTime(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("HMAC-SHA1 returned a {0}-byte digest, expected 20")]
    DigestLength(usize),
    #[error("HMAC-SHA1 rejected the secret")]
    InvalidKey,
}

#[derive(Debug, Error)]
pub enum OtpError {
    #[error(transparent)]
    Clock(#[from] ClockError),
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no secret key configured")]
    MissingKey,
    #[error("the key is not a valid base32 encoding")]
    InvalidKey,
    #[error("the key is empty")]
    EmptyKey,
    #[error("time step must be a positive number of seconds")]
    InvalidTimeStep,
    #[error("the fixed source needs a seconds value")]
    MissingSeconds,
    #[error("invalid seconds value {0:?}")]
    InvalidSeconds(String),
    #[error(transparent)]
    Clock(#[from] ClockError),
}
