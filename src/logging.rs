//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `projgen=debug`.
pub const LOG_ENV: &str = "PROJGEN_LOG";

/// Installs a stderr subscriber.
///
/// `verbose` forces `debug`; otherwise `PROJGEN_LOG` is honoured, falling
/// back to `warn`. Returns `false` if a global subscriber was already set.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Routes events from every test in the crate through the test harness's
/// captured output. Later calls, and [`init`], leave it in place.
#[cfg(test)]
pub(crate) fn install_test_subscriber() {
    let captured = tracing_subscriber::fmt().with_test_writer().finish();
    let _ = tracing::subscriber::set_global_default(captured);
}
