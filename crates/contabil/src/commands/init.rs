//! Create a starter site.toml and public directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use contabil_pages::about;

use crate::config::{load_config, DEFAULT_CONFIG};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing contabil...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let config = load_config(config_path)?;
    let images_dir = Path::new(&config.build.public).join("images");
    fs::create_dir_all(&images_dir).context("Failed to create public directory")?;

    for image in [about::OFFICE_IMAGE, about::TEAM_IMAGE] {
        let path = Path::new(&config.build.public).join(image);
        if !path.exists() {
            tracing::info!("Add {} before deploying", path.display());
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'contabil build' to generate the site.");

    Ok(())
}
