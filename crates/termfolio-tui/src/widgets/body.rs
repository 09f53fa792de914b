use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::page::PageLayout;

pub struct BodyWidget;

impl BodyWidget {
    /// Draw body lines starting at `first_line` into `area`. Nothing is shown
    /// until the hero has revealed the content.
    pub fn render(frame: &mut Frame, area: Rect, app: &App, first_line: usize) {
        let background = Style::default().bg(app.theme.background);
        if !app.controller.is_content_visible() {
            frame.render_widget(Paragraph::new("").style(background), area);
            return;
        }

        let lines = visible_lines(app, first_line, area.height as usize);
        frame.render_widget(
            Paragraph::new(lines).style(background.fg(app.theme.text)),
            area,
        );
    }
}

fn visible_lines(app: &App, first_line: usize, count: usize) -> Vec<Line<'static>> {
    let mut rng = rand::thread_rng();
    let focused_line = app.focused().map(|link| link.line);

    (first_line..first_line + count)
        .map_while(|index| {
            let line = app.layout.lines.get(index)?;
            if let Some(header) = app.layout.headers.iter().find(|h| h.line == index) {
                let text = app.header_text(header.section, &mut rng);
                return Some(PageLayout::header_line(&text, &app.theme));
            }
            if focused_line == Some(index) {
                let mut line = line.clone();
                for span in line.spans.iter_mut().skip(2) {
                    span.style = span.style.add_modifier(Modifier::REVERSED);
                }
                return Some(line);
            }
            Some(line.clone())
        })
        .collect()
}
