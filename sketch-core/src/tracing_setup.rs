use tracing::subscriber::SetGlobalDefaultError;

/// Installs the default tracing subscriber.
///
/// If there is no default tracing subscriber, we set our own. If one has already been set,
/// the caller gets an error which it is free to swallow.
///
/// Logs are written to stderr. Demo binaries own stdout.
pub fn try_init_tracing() -> Result<(), SetGlobalDefaultError> {
    use time::macros::format_description;
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::fmt::time::UtcTime;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // DEBUG should print a few logs per low-density event.
    // INFO should only print logs for noteworthy things.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("RUST_LOG")
        .from_env_lossy();
    // Time without the date, seconds precision, no target.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_timer(UtcTime::new(format_description!(
            "[hour]:[minute]:[second]"
        )))
        .with_target(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);
    tracing::dispatcher::set_global_default(registry.into())
}
