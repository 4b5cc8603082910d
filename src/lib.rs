pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod storage;

use std::sync::Once;

pub use application::{LedgerError, LedgerService};
pub use config::LedgerConfig;
pub use domain::*;
pub use storage::LedgerStore;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber (stderr). `RUST_LOG` overrides the
/// default level, which is `warn`, or `debug` when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let default_directive = if verbose { "tally=debug" } else { "tally=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_twice_does_not_panic() {
        super::init_tracing(false);
        super::init_tracing(true);
    }
}
