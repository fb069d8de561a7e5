use clap::Parser;
use piece_mobility::{run, Config, Outcome};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the output file only holds results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    match run(&config)? {
        Outcome::Analyzed(count) => tracing::info!(count, "wrote results"),
        Outcome::Rejected(err) => tracing::info!(%err, "wrote rejection"),
    }
    Ok(())
}
