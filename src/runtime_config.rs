//! Environment-based tuning for the coroutine runtime.
//!
//! The serve loop runs on `may` coroutines; `SPECDOCS_STACK_SIZE` sets their
//! stack size in bytes, accepted in decimal (`16384`) or hex (`0x4000`).
//! Default: `0x4000` (16 KB), which is plenty for serving pre-rendered bytes.

use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Load once at startup with [`RuntimeConfig::from_env()`] and apply via
/// `may::config().set_stack_size(..)` before the server starts.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for serve coroutines in bytes (default: 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = match env::var("SPECDOCS_STACK_SIZE") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(0x4000)
                } else {
                    val.parse().unwrap_or(0x4000)
                }
            }
            Err(_) => 0x4000,
        };
        RuntimeConfig { stack_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: parallel tests must not race on the process environment.
    #[test]
    fn test_stack_size_from_env() {
        std::env::remove_var("SPECDOCS_STACK_SIZE");
        assert_eq!(RuntimeConfig::from_env().stack_size, 0x4000);

        std::env::set_var("SPECDOCS_STACK_SIZE", "0x8000");
        assert_eq!(RuntimeConfig::from_env().stack_size, 0x8000);

        std::env::set_var("SPECDOCS_STACK_SIZE", "16384");
        assert_eq!(RuntimeConfig::from_env().stack_size, 16384);

        std::env::set_var("SPECDOCS_STACK_SIZE", "not-a-number");
        assert_eq!(RuntimeConfig::from_env().stack_size, 0x4000);

        std::env::remove_var("SPECDOCS_STACK_SIZE");
    }
}
