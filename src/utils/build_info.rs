use genversion_config::FlagTable;
use tracing::{debug, warn};

const UNKNOWN: &str = "unknown";

/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_branch: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub rustc: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("GENVERSION_BUILD_HASH").unwrap_or(UNKNOWN),
        git_branch: option_env!("GENVERSION_BUILD_BRANCH").unwrap_or(UNKNOWN),
        timestamp: option_env!("GENVERSION_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        target: option_env!("GENVERSION_BUILD_TARGET").unwrap_or(UNKNOWN),
        rustc: option_env!("GENVERSION_BUILD_RUSTC").unwrap_or(UNKNOWN),
    }
}

impl BuildMetadata {
    /// Flag names of the `build:` section paired with the captured values.
    pub fn build_flags(&self) -> [(&'static str, &'static str); 6] {
        [
            ("VERSION", self.version),
            ("BUILT_DATE", self.timestamp),
            ("BUILT_MACH", self.target),
            ("BUILT_REV", self.git_hash),
            ("BUILT_BRANCH", self.git_branch),
            ("CC", self.rustc),
        ]
    }

    /// Fills `build:` flags the configuration left unset. Values that could
    /// not be captured stay unset so they print as `UNDEF`.
    pub fn fill_flags(&self, flags: &mut FlagTable) {
        for (name, value) in self.build_flags() {
            if value == UNKNOWN {
                if !flags.is_set(name) {
                    warn!(flag = name, "build metadata unavailable; flag left undefined");
                }
                continue;
            }
            if flags.set_if_absent(name, value) {
                debug!(flag = name, value, "flag filled from build metadata");
            }
        }
    }
}
