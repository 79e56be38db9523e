//! Runs every frequency demo once on its canonical input and prints the
//! results as JSON.
mod demos;
mod logging;

use freq_logging::{freq_error, freq_info};
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    logging::initialize(LevelFilter::Info);

    let report = demos::run_all().inspect_err(|err| freq_error!("demo run failed: {err:#}"))?;
    freq_info!("ran {} demos", report.len());

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
