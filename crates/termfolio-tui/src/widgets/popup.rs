use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use termfolio_core::config::KeymapConfig;

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Key binding overview
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let rows = help_rows(keymap);
        let area = frame.area();

        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<14}", keys),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(what, Style::default().fg(theme.text)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.muted),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn help_rows(keymap: &KeymapConfig) -> Vec<(String, &'static str)> {
    vec![
        (format!("{} / {}", keymap.scroll_down, keymap.scroll_up), "scroll / open hero"),
        (
            format!("{} / {}", keymap.scroll_half_down, keymap.scroll_half_up),
            "half page",
        ),
        (
            format!("{} / {}", keymap.scroll_page_down, keymap.scroll_page_up),
            "full page",
        ),
        (
            format!("{} / {}", keymap.jump_to_top, keymap.jump_to_bottom),
            "top / bottom",
        ),
        (
            format!("{} / {}", keymap.next_section, keymap.prev_section),
            "next / prev section",
        ),
        ("1-9".to_string(), "jump to section"),
        (format!("{} / {}", keymap.next_link, keymap.prev_link), "cycle links"),
        (keymap.open_link.clone(), "open link"),
        (keymap.toggle_media.clone(), "switch hero media"),
        (keymap.toggle_nav.clone(), "toggle navigation"),
        (keymap.help.clone(), "this help"),
        (keymap.quit.clone(), "quit"),
    ]
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_help_rows_follow_keymap() {
        let keymap = KeymapConfig {
            toggle_media: "M".to_string(),
            ..Default::default()
        };
        let rows = help_rows(&keymap);
        assert!(rows.iter().any(|(k, w)| k == "M" && *w == "switch hero media"));
    }
}
