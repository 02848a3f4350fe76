//! Log initialization.

use tracing_subscriber::EnvFilter;

/// Crates whose spans and events the verbosity flag controls.
const CRATE_TARGETS: [&str; 6] = [
    "typhon",
    "typhon_calendar",
    "typhon_geo",
    "typhon_io",
    "typhon_decompose",
    "typhon_dataset",
];

/// Initializes the global subscriber.
///
/// The `-v` count maps to a level for this workspace's crates; everything
/// else stays at `warn`. `RUST_LOG` overrides the whole filter when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,{directives}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
