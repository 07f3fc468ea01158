use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to stderr. `WHATIF_LOG` overrides the CLI flag.
pub fn init(log_level: &str) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_env("WHATIF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .try_init()?;

    Ok(())
}
