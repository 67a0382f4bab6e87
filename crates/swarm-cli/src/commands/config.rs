//! Default config export command

use anyhow::Result;
use std::fs;
use std::path::Path;
use swarm_core::SimConfig;

pub fn run(output: Option<&str>) -> Result<()> {
    let text = SimConfig::default().to_toml_string()?;

    match output {
        Some(path) => {
            if Path::new(path).exists() {
                anyhow::bail!("File '{}' already exists", path);
            }
            fs::write(path, text)?;
            println!("Wrote default config to {}", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}
