//! Logging macros that forward to [`tracing`] when the matching level feature
//! of this crate is enabled, and compile down to nothing otherwise.
//!
//! The level switches are resolved inside this crate, so callers only need
//! to pick the features on `neo_logs` itself.

#[doc(hidden)]
pub use tracing as __tracing;

#[doc(hidden)]
pub const INFO_ENABLED: bool = cfg!(feature = "log_info");

#[doc(hidden)]
pub const WARN_ENABLED: bool = cfg!(feature = "log_warnings");

#[doc(hidden)]
pub const DEBUG_ENABLED: bool = cfg!(feature = "log_debug");

#[doc(hidden)]
pub const ERROR_ENABLED: bool = cfg!(feature = "log_errors");

#[macro_export]
macro_rules! info {
    ($($t:tt)*) => {
        if $crate::INFO_ENABLED {
            $crate::__tracing::info!($($t)*);
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => {
        if $crate::WARN_ENABLED {
            $crate::__tracing::warn!($($t)*);
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => {
        if $crate::DEBUG_ENABLED {
            $crate::__tracing::debug!($($t)*);
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => {
        if $crate::ERROR_ENABLED {
            $crate::__tracing::error!($($t)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_logs_without_arg() {
        info!("Help me out");
        debug!("Help me out");
        warn!("Help me out");
        error!("Help me out");

        assert!(logs_contain("Help me out"));
    }

    #[test]
    #[traced_test]
    fn test_logs_with_arg() {
        info!("Help me out: {}", 1);
        warn!("Help me out: {}", 2);
        error!("Help me out: {}", 3);

        assert!(logs_contain("Help me out: 1"));
        assert!(logs_contain("Help me out: 2"));
        assert!(logs_contain("Help me out: 3"));
    }

    #[test]
    #[traced_test]
    fn test_logs_with_fields() {
        info!(channels = 2, "api selected");

        assert!(logs_contain("api selected"));
        assert!(logs_contain("channels=2"));
    }
}
