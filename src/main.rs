use std::io;

use coinflip_sim::{run, SimulationConfig, TextHistogram};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "coinflip_sim=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = SimulationConfig::default();
    let mut histogram = TextHistogram::new(io::stdout());

    run(&config, &mut io::stdout(), &mut histogram)?;
    Ok(())
}
