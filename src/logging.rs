use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber for hosts that want the behavior's
/// transition events on stderr. With `debug` the `RUST_LOG` environment
/// variable may raise or lower the level; without it the level is pinned to
/// `info` so stray environment settings cannot flood a release build.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
