use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use termfolio_core::hero::MediaKind;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::App;
use crate::theme::blend;

/// Share of the hero the fully expanded card covers
const CARD_WIDTH_SHARE: f64 = 0.95;
const CARD_HEIGHT_SHARE: f64 = 0.85;
const MIN_CARD_WIDTH: u16 = 10;
const MIN_CARD_HEIGHT: u16 = 5;

/// One star per this many cells, roughly
const STAR_DENSITY: u32 = 53;

pub struct HeroWidget;

impl HeroWidget {
    /// Draw the hero into `area`, the part of it still on screen. The hero is
    /// laid out at full height and shifted up by the page scroll.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let theme = &app.theme;
        let geometry = app.controller.geometry();
        let full_height = app.hero_height();
        let scroll = app.scroller.position() as i32;

        // Backdrop and starfield fade out as the hero opens
        let backdrop = blend(theme.glow, theme.background, geometry.backdrop_opacity);
        let star = blend(theme.muted, backdrop, geometry.backdrop_opacity);
        let stars: Vec<Line> = (0..area.height)
            .map(|row| starfield_row(area.width, row as i32 + scroll))
            .map(Line::from)
            .collect();
        frame.render_widget(
            Paragraph::new(stars).style(Style::default().fg(star).bg(backdrop)),
            area,
        );

        // Media card, scaled from the collapsed size up to nearly full screen
        let (sx, sy) = geometry.scale(app.controller.viewport());
        let card_w = ((area.width as f64 * CARD_WIDTH_SHARE * sx).round() as u16)
            .clamp(MIN_CARD_WIDTH.min(area.width), area.width);
        let card_h = ((full_height as f64 * CARD_HEIGHT_SHARE * sy).round() as u16)
            .clamp(MIN_CARD_HEIGHT.min(full_height), full_height);
        let card_x = (area.width - card_w) / 2;
        let card_y = (full_height.saturating_sub(card_h) / 2) as i32;

        let surface = blend(Color::Rgb(0, 0, 0), theme.surface, geometry.media_dim);
        let pattern = blend(theme.accent, surface, 1.0 - geometry.media_dim);
        if let Some(rect) = clip_rows(area, card_x, card_y - scroll, card_w, card_h) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(blend(theme.accent, surface, 0.8)))
                .style(Style::default().bg(surface));
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            let rows: Vec<Line> = (0..inner.height)
                .map(|row| media_row(app.controller.media_kind(), inner.width, row))
                .map(Line::from)
                .collect();
            frame.render_widget(
                Paragraph::new(rows).style(Style::default().fg(pattern).bg(surface)),
                inner,
            );
        }

        let label = match app.controller.media_kind() {
            MediaKind::Image => "[ IMAGE ]",
            MediaKind::Video => "[ ▶ VIDEO ]",
        };
        let center_x = area.width as i32 / 2;
        let label_row = card_y + card_h as i32 - 2 - scroll;
        place_centered(
            frame,
            area,
            center_x,
            label_row,
            label,
            Style::default().fg(theme.muted).bg(surface),
        );

        // Split title drifting apart by `text_offset` percent of the width
        let offset = (geometry.text_offset / 100.0 * area.width as f64).round() as i32;
        let title_row = card_y + card_h as i32 / 2 - scroll;
        let name = app.portfolio.hero.name.trim();
        let (first, rest) = match name.split_once(' ') {
            Some((first, rest)) => (first, rest.trim()),
            None => (name, ""),
        };
        let title_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD);
        if rest.is_empty() {
            place_centered(frame, area, center_x - offset, title_row, first, title_style);
        } else {
            let first_x = center_x - 1 - offset - first.width() as i32;
            place(frame, area, first_x, title_row, first, title_style);
            let rest_style = Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD);
            place(frame, area, center_x + 1 + offset, title_row, rest, rest_style);
        }

        let below = card_y + card_h as i32 - scroll;
        let subtitle = app.portfolio.hero.subtitle.as_str();
        if !subtitle.is_empty() {
            let style = Style::default().fg(theme.text);
            place_centered(frame, area, center_x - offset, below, subtitle, style);
        }
        if !app.controller.is_fully_expanded() {
            let hint = format!("▼ {}", app.portfolio.hero.scroll_hint);
            let style = Style::default().fg(theme.muted);
            place_centered(frame, area, center_x + offset, below + 1, &hint, style);
        }
    }
}

/// Intersect a hero-relative rect with the visible rows of `area`
fn clip_rows(area: Rect, x: u16, y: i32, width: u16, height: u16) -> Option<Rect> {
    let top = y.max(0);
    let bottom = (y + height as i32).min(area.height as i32);
    if bottom <= top {
        return None;
    }
    Some(Rect::new(
        area.x + x,
        area.y + top as u16,
        width.min(area.width.saturating_sub(x)),
        (bottom - top) as u16,
    ))
}

fn place_centered(frame: &mut Frame, area: Rect, center: i32, row: i32, text: &str, style: Style) {
    let x = center - text.width() as i32 / 2;
    place(frame, area, x, row, text, style);
}

/// Draw one line of text at a column that may lie outside `area`; whatever
/// falls outside is cut off
fn place(frame: &mut Frame, area: Rect, x: i32, row: i32, text: &str, style: Style) {
    if row < 0 || row >= area.height as i32 {
        return;
    }
    let mut col = x;
    let mut visible = String::new();
    let mut start = None;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as i32;
        if col >= 0 && col + w <= area.width as i32 {
            start.get_or_insert(col);
            visible.push(ch);
        }
        col += w;
    }
    let Some(start) = start else {
        return;
    };
    let width = visible.width() as u16;
    let rect = Rect::new(area.x + start as u16, area.y + row as u16, width, 1);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(visible, style))), rect);
}

/// Deterministic star pattern so the field does not flicker between frames
fn starfield_row(width: u16, row: i32) -> String {
    (0..width)
        .map(|col| {
            let h = hash(col as u32, row as u32);
            if h % STAR_DENSITY != 0 {
                ' '
            } else if h % 5 == 0 {
                '✦'
            } else {
                '·'
            }
        })
        .collect()
}

fn media_row(kind: MediaKind, width: u16, row: u16) -> String {
    match kind {
        MediaKind::Image => (0..width)
            .map(|col| if (col + row * 2) % 6 == 0 { '╱' } else { ' ' })
            .collect(),
        MediaKind::Video => {
            let ch = if row % 2 == 0 { '─' } else { ' ' };
            std::iter::repeat(ch).take(width as usize).collect()
        }
    }
}

fn hash(x: u32, y: u32) -> u32 {
    let mut h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77);
    h ^= h >> 15;
    h = h.wrapping_mul(0xC2B2_AE3D);
    h ^ (h >> 13)
}
