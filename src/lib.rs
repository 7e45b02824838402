pub mod config;
pub mod flagging; // Reference range interpretation & flagging
pub mod models;

pub use flagging::{evaluate, evaluate_report, RangeEvaluator};
pub use models::{EntryIndicator, Flag, FlaggedResult, LabResultEntry, Sex};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, honouring `RUST_LOG`.
///
/// Returns `false` when a global subscriber is already set (the host
/// application owns logging).
pub fn init_logging() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{} logging initialised", config::APP_NAME, config::APP_VERSION);
    }
    installed
}
