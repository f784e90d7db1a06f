use std::fs;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_RTC_PATH: &str = "/sys/class/rtc/rtc0/since_epoch";

/// An external clock that reports absolute seconds.
///
/// Register access and BCD decoding live behind this boundary; callers only
/// ever see an integer timestamp or an I/O error.
pub trait HardwareClock {
    fn read_timestamp(&self) -> Result<i64>;
}

impl<T: HardwareClock + ?Sized> HardwareClock for &T {
    fn read_timestamp(&self) -> Result<i64> {
        (**self).read_timestamp()
    }
}

/// Linux RTC class device, read through sysfs.
#[derive(Debug, Clone)]
pub struct SysfsRtc {
    path: PathBuf,
}

impl SysfsRtc {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        SysfsRtc {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for SysfsRtc {
    fn default() -> Self {
        SysfsRtc::new(DEFAULT_RTC_PATH)
    }
}

impl HardwareClock for SysfsRtc {
    fn read_timestamp(&self) -> Result<i64> {
        let contents = fs::read_to_string(&self.path)?;
        parse_timestamp(&contents)
    }
}

fn parse_timestamp(contents: &str) -> Result<i64> {
    contents.trim().parse::<i64>().map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("unexpected RTC reading {:?}: {}", contents.trim(), e),
        )
    })
}
