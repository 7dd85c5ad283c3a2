//! Console logging setup shared by the CLI and the desktop viewer
//!
//! `RUST_LOG` takes precedence over the verbosity flag:
//!
//! ```bash
//! RUST_LOG=patchnotes_core=debug patchnotes render
//! ```

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr `fmt` subscriber. Does nothing if one is already set.
pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_filter() {
        assert_eq!(verbosity_filter(0), "warn");
        assert_eq!(verbosity_filter(1), "info");
        assert_eq!(verbosity_filter(2), "debug");
        assert_eq!(verbosity_filter(9), "trace");
    }

    #[test]
    fn test_setup_twice_is_harmless() {
        setup_logging(0);
        setup_logging(2);
    }
}
