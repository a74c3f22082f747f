use std::path::Path;

use anyhow::Context;
use lore_config::LoreConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LoreConfig> {
    load_dotenv(flags.env_file.as_deref())?;

    match &flags.config {
        Some(path) => LoreConfig::load_with_file(Path::new(path))
            .with_context(|| format!("failed to load config file {path}")),
        None => LoreConfig::load().context("failed to load configuration"),
    }
}

fn load_dotenv(explicit: Option<&str>) -> anyhow::Result<()> {
    if let Some(path) = explicit {
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load dotenv file at {path}"))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
