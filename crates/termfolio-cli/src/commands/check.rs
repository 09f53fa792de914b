use anyhow::Result;

use termfolio_core::Portfolio;
use termfolio_tui::{page::PageLayout, Theme};

/// Width used to estimate section lengths
const CHECK_WIDTH: u16 = 80;

pub fn run(portfolio: &Portfolio) -> Result<()> {
    let layout = PageLayout::build(portfolio, &Theme::default(), CHECK_WIDTH);

    println!("Portfolio for {} is valid.\n", portfolio.hero.name);
    println!("Sections ({}):", portfolio.navigation.len());

    for (i, item) in portfolio.navigation.iter().enumerate() {
        let start = layout.section_starts[i];
        let end = layout.section_starts[i + 1..]
            .iter()
            .flatten()
            .next()
            .copied()
            .unwrap_or(layout.len());
        match start {
            Some(start) => println!(
                "  {}. {:<12} {:>4} lines at {} columns",
                i + 1,
                item.label,
                end - start,
                CHECK_WIDTH
            ),
            None => println!("  {}. {:<12} hero", i + 1, item.label),
        }
    }

    println!(
        "\n{} projects, {} timeline entries, {} links",
        portfolio.projects.items.len(),
        portfolio.experience.len(),
        layout.links.len()
    );
    Ok(())
}
