//! Logging setup
//!
//! The service logs through `tracing`. Request logs from the actix `Logger`
//! middleware and sqlx statement logs arrive through the `log` bridge that
//! `tracing-subscriber` installs on `init`.

use crate::config::Environment;
use tracing_subscriber::EnvFilter;

/// Default filter directives when `RUST_LOG` is not set
pub fn default_directives(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => "resale_catalog=debug,actix_web=info,sea_orm=info",
        Environment::Production => "resale_catalog=info,actix_web=info,sea_orm=warn",
        Environment::Test => "resale_catalog=warn,actix_web=warn,sea_orm=warn",
    }
}

/// Build the env filter, preferring `RUST_LOG` when present
pub fn build_filter(environment: Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)))
}

/// Install the global tracing subscriber
///
/// Production emits JSON lines. Safe to call more than once; later calls are
/// ignored.
pub fn init_tracing(environment: Environment) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(environment))
        .with_target(true)
        .with_thread_ids(false);

    let result = if environment.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
