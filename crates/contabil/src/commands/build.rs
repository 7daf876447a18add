//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use contabil_static::StaticBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> Result<()> {
    tracing::info!("Building static site...");

    let config = load_config(config_path)?.into_build_config(output, minify);

    let result = StaticBuilder::new(config)?.build().await?;

    tracing::info!(
        "Built {} pages with {} sections and {} assets in {}ms",
        result.pages,
        result.sections,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    if !result.host_routes.is_empty() {
        let paths: Vec<&str> = result.host_routes.iter().map(|r| r.path()).collect();
        tracing::warn!(
            "No pages generated for {}; navigation and contact buttons link there, \
             so 'contabil serve' answers them with 404.html",
            paths.join(", ")
        );
    }

    Ok(())
}
