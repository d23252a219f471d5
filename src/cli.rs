//! Entry point logic of the `genversion` binary.

use std::io::{self, BufWriter};

use genversion_config::Config;

use crate::{errors::Result, generator::generate_from_config, utils::build_info};

/// Configuration selected at compile time through `GENVERSION_CONFIG`.
const EMBEDDED_CONFIG: &str = include_str!(concat!(env!("OUT_DIR"), "/genversion.json"));

/// Loads the embedded configuration, completed with this build's metadata.
pub fn embedded_config() -> Result<Config> {
    let mut config = Config::from_json(EMBEDDED_CONFIG)?;
    build_info::current().fill_flags(&mut config.flags);
    Ok(config)
}

/// Writes the generated file to stdout.
pub fn run_cli() -> Result<()> {
    let config = embedded_config()?;
    let stdout = io::stdout();
    generate_from_config(&config, BufWriter::new(stdout.lock()))?;
    Ok(())
}
