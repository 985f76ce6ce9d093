pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::{App, FlashKind};
pub use theme::{resolve_theme, Theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App, tick_rate_ms: u64) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(tick_rate_ms);

    let result = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        handle_event(&mut app, events.next().await);

        if app.should_quit {
            break Ok(());
        }
    };

    ratatui::restore();
    result
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => app.update_flash(),
        Event::Resize => {}
        // Input is gone, so the user can no longer quit by key
        Event::Closed => app.should_quit = true,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_row(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_row(),

            // Toggle the highlighted factor
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => app.toggle_selected(),

            // Tab switching
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => app.toggle_tab(),

            // Clearing
            KeyCode::Char('c') => app.clear_current(),
            KeyCode::Char('C') => app.clear_all(),

            KeyCode::Char('?') => app.show_help(),
            KeyCode::Char('b') => app.show_breakdown(),

            _ => {}
        },
        app::InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => app.dismiss_breakdown(),
            _ => {}
        },
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::selection::FactorKind;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn test_app() -> App {
        App::new(Catalog::default(), ThemeColors::dark())
    }

    #[test]
    fn test_space_toggles_and_q_quits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection.is_selected(FactorKind::Risk, "education"));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_but_plain_c_clears() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        assert!(app.selection.is_empty());
        assert!(!app.should_quit);

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_then_toggle_selects_prevention() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.selection.is_selected(FactorKind::Prevention, "elderlyObesity"));
        assert_eq!(app.summary.prevention_score, 0.8);
    }

    #[test]
    fn test_closed_input_quits() {
        let mut app = test_app();
        handle_event(&mut app, Event::Tick);
        assert!(!app.should_quit);
        handle_event(&mut app, Event::Closed);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_mode, app::InputMode::Normal);
    }

    #[test]
    fn test_breakdown_ignores_toggle_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection.is_empty());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, app::InputMode::Normal);
    }
}
