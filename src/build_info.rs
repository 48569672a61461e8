//! Build information module
//!
//! Compile-time constants for build number and timestamp, embedded by `build.rs`.

use serde::Serialize;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("FOOD_DIARY_BUILD_NUMBER") {
    Some(s) => match parse_u64(s) {
        Some(n) => n,
        None => 0,
    },
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("FOOD_DIARY_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

const fn parse_u64(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut result: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return None;
        }
        result = result * 10 + (b - b'0') as u64;
        i += 1;
    }
    Some(result)
}

/// Build information attached to JSON reports
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }

    /// One-line version string for `--version` and startup logging
    pub fn version_line(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}
