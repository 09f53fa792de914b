mod body;
mod hero;
mod nav;
mod popup;
mod status_bar;

pub use body::BodyWidget;
pub use hero::HeroWidget;
pub use nav::NavWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, Mode, STATUS_BAR_HEIGHT};

/// Draw the whole screen: page (hero then body), navigation bar, status bar
/// and the help overlay
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(frame.area());
    let page = chunks[0];

    let hero_height = app.hero_height();
    let scroll = app.scroller.position();
    let hero_rows = hero_height.saturating_sub(scroll).min(page.height);

    if hero_rows > 0 {
        let hero_area = Rect::new(page.x, page.y, page.width, hero_rows);
        HeroWidget::render(frame, hero_area, app);
    }
    if hero_rows < page.height {
        let body_area = Rect::new(page.x, page.y + hero_rows, page.width, page.height - hero_rows);
        let first_line = scroll.saturating_sub(hero_height) as usize;
        BodyWidget::render(frame, body_area, app, first_line);
    }

    if app.nav_visible && page.height > 0 {
        NavWidget::render(frame, Rect::new(page.x, page.y, page.width, 1), app);
    }
    StatusBarWidget::render(frame, chunks[1], app);

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, &app.config.keymap, &app.theme);
    }
}
