use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct NavWidget;

impl NavWidget {
    /// One-row navigation bar over the top of the page. Transparent at the
    /// top of the page, solid once scrolled.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let active = app.tracker.active();

        let mut items: Vec<Span> = Vec::new();
        for (i, item) in app.portfolio.navigation.iter().enumerate() {
            let style = if i == active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.muted)
            };
            items.push(Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.border)));
            items.push(Span::styled(item.label.clone(), style));
        }
        items.push(Span::raw(" "));

        let brand = initials(&app.portfolio.hero.name);
        let items_width: usize = items.iter().map(|s| s.width()).sum();
        let padding = (area.width as usize).saturating_sub(items_width + brand.chars().count() + 2);

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                brand,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding + 1)),
        ];
        spans.extend(items);

        let mut style = Style::default();
        if app.tracker.is_scrolled() {
            style = style.bg(theme.surface);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Nova Reyes"), "NR");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials(""), "");
    }
}
