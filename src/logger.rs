use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Initialises the global subscriber. The library crates log through the
/// `log` facade, so a `LogTracer` is registered first to forward their
/// records into tracing; without it every `log` call is a silent no-op.
pub fn setup(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    LogTracer::init()?;

    let default_filter = if debug {
        "goldview=debug,data=debug,exchange=debug,info"
    } else {
        "info"
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
