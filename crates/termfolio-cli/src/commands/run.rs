use anyhow::Result;
use tracing::info;

use termfolio_core::{AppConfig, Portfolio};
use termfolio_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme,
    scroll::ScrollConfigExt,
    terminal::TerminalSession,
    widgets,
};

pub fn run(config: AppConfig, portfolio: Portfolio) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );

    let title = format!("{} - termfolio", portfolio.hero.name);
    let mut app = App::new(config, portfolio, theme);

    // Restores the terminal on every exit path, including `?` below
    let mut session = TerminalSession::enter(&title)?;
    let size = session.terminal().size()?;
    app.on_resize(size.width, size.height);
    info!(width = size.width, height = size.height, "portfolio started");

    loop {
        app.update_animation();

        session.terminal().draw(|frame| widgets::draw(frame, &app))?;

        let event = if app.is_animating() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Pointer(pointer) => app.pointer(pointer),
                AppEvent::Resize(w, h) => app.on_resize(w, h),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("portfolio closed");
    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::ScrollDown => app.scroll_step(true),
        Action::ScrollUp => app.scroll_step(false),
        Action::ScrollHalfPageDown => app.scroll_half_page(true),
        Action::ScrollHalfPageUp => app.scroll_half_page(false),
        Action::ScrollPageDown => app.scroll_page(true),
        Action::ScrollPageUp => app.scroll_page(false),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => app.pending_key = Some('g'),
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::JumpToSection(index) => app.scroll_to_section(index),
        Action::NextLink => app.next_link(),
        Action::PrevLink => app.prev_link(),
        Action::OpenLink => app.open_focused_link(),
        Action::ToggleMedia => app.toggle_media(),
        Action::ToggleNav => app.toggle_nav(),
        Action::ToggleHelp => app.toggle_help(),
        Action::ExitMode => app.exit_mode(),
        Action::None => {}
    }
}
