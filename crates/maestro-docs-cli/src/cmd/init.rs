use anyhow::Result;
use maestro_docs_core::config::{config_path, Config, CONFIG_FILE};
use maestro_docs_core::io;
use std::path::Path;

/// Write a default `maestro-docs.yaml` at the project root. Idempotent: an
/// existing file is left untouched.
pub fn run(root: &Path) -> Result<()> {
    let data = serde_yaml::to_string(&Config::default())?;
    let written = io::write_if_missing(&config_path(root), data.as_bytes())?;
    if written {
        println!("Created {CONFIG_FILE}");
    } else {
        println!("{CONFIG_FILE} already exists");
    }
    Ok(())
}
