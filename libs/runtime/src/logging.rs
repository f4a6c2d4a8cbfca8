use tracing::Level;
use tracing_subscriber::EnvFilter;

// -------- level helpers --------
fn level_for(verbose: u8, debug: bool) -> Level {
    match verbose {
        0 => {
            if debug {
                Level::DEBUG
            } else {
                Level::INFO
            }
        }
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize console logging.
///
/// `RUST_LOG` takes precedence when set; otherwise the level comes from
/// the profile's debug flag, raised further by repeated `-v` flags.
/// Safe to call more than once (later calls are no-ops).
pub fn init_logging(verbose: u8, debug: bool) {
    let default_level = level_for(verbose, debug);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0, false), Level::INFO);
        assert_eq!(level_for(0, true), Level::DEBUG);
        assert_eq!(level_for(1, false), Level::DEBUG);
        assert_eq!(level_for(2, false), Level::TRACE);
        assert_eq!(level_for(5, true), Level::TRACE);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(0, false);
        init_logging(2, true);
    }
}
