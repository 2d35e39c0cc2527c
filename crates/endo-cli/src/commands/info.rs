//! Summarize the exported dataset.

use anyhow::{bail, Result};
use endo_core::config::PipelineConfig;
use endo_synth::Dataset;

pub fn run(config: &PipelineConfig) -> Result<()> {
    if !config.dataset_path.exists() {
        bail!(
            "no dataset at {}. Run `endo train` first.",
            config.dataset_path.display()
        );
    }

    let dataset = Dataset::read_csv(&config.dataset_path)?;
    println!("{}", dataset.summary());
    Ok(())
}
