use anyhow::Result;

use termfolio_core::AppConfig;
use termfolio_tui::available_themes;

pub fn run(config: &AppConfig) -> Result<()> {
    let current = config.ui.theme.name.to_lowercase();
    println!("Built-in themes:\n");
    for name in available_themes() {
        let marker = if name == current { "*" } else { " " };
        println!("  {} {}", marker, name);
    }
    println!("\nSet one with `theme = \"<name>\"` under [ui] in {}", AppConfig::config_path().display());
    Ok(())
}
