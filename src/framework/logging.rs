use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[allow(unused_imports)]
use tracing::{trace, warn};

pub const DEFAULT_FILTER: &str = "motus=info";

/// Installs the global subscriber. `RUST_LOG` wins over `filter`.
///
/// Logs go to stderr so they don't interleave with the board on stdout.
pub fn init_tracing(filter: &str) {
    let (env_filter, invalid) = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => (env_filter, None),
        Err(_) => match EnvFilter::try_new(filter) {
            Ok(env_filter) => (env_filter, None),
            Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
        },
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    if let Some(err) = invalid {
        warn!(filter, %err, "invalid log filter, using {DEFAULT_FILTER}");
    }

    trace!("finished");
}
