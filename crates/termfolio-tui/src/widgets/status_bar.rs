use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => app.regime().to_uppercase(),
            Mode::Help => "HELP".to_string(),
        };
        let progress = (app.controller.progress() * 100.0).round() as u32;
        let section = app
            .active_section()
            .map(|s| app.portfolio.label_for(s).to_string())
            .unwrap_or_default();

        let left = format!(" {} | hero {:>3}% | {} ", mode_str, progress, section);

        let middle = if let Some(msg) = &app.status_message {
            format!(" {} ", msg)
        } else if let Some(link) = app.focused() {
            format!(" {} -> {} ", link.label, link.url)
        } else {
            String::new()
        };

        let help_hint = " q:quit j/k:scroll [/]:section tab:links ?:help ";
        let used = left.width() + middle.width() + help_hint.width();
        let padding = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                left,
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(middle, Style::default().fg(theme.text).bg(theme.surface)),
            Span::styled(" ".repeat(padding), Style::default().bg(theme.surface)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.surface)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
