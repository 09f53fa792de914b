use std::path::{Path, PathBuf};

use anyhow::Result;

use termfolio_core::{content::SAMPLE_PORTFOLIO, AppConfig};

/// Files written by `init`
#[derive(Debug)]
pub struct InitReport {
    pub config_path: PathBuf,
    pub content_path: PathBuf,
    pub skipped: Vec<PathBuf>,
}

pub fn run(force: bool) -> Result<()> {
    let report = init_in(&AppConfig::config_dir(), force)?;

    for path in &report.skipped {
        println!("Keeping existing {} (use --force to overwrite)", path.display());
    }
    println!("Config:    {}", report.config_path.display());
    println!("Portfolio: {}", report.content_path.display());
    println!("\nEdit the portfolio file, then run `termfolio check` to validate it.");
    Ok(())
}

/// Write a default config and a copy of the sample portfolio into `dir`.
/// Existing files are kept unless `force` is set.
pub fn init_in(dir: &Path, force: bool) -> Result<InitReport> {
    std::fs::create_dir_all(dir)?;
    let config_path = dir.join("config.toml");
    let content_path = dir.join("portfolio.toml");
    let mut skipped = Vec::new();

    if content_path.exists() && !force {
        skipped.push(content_path.clone());
    } else {
        std::fs::write(&content_path, SAMPLE_PORTFOLIO)?;
    }

    if config_path.exists() && !force {
        skipped.push(config_path.clone());
    } else {
        let mut config = AppConfig::default();
        config.general.content_path = Some(content_path.clone());
        config.save_to(&config_path)?;
    }

    Ok(InitReport {
        config_path,
        content_path,
        skipped,
    })
}
