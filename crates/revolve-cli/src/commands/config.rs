use std::path::Path;

use anyhow::Result;

use revolve_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    let state = if config_path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", config_path.display(), state);
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
        println!("\nTo overwrite it with the defaults, run:");
        println!("  revolve config init --force");
        return Ok(());
    }

    AppConfig::default().save_to(config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
