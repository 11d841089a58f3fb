use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::router::NAV_LINKS;
use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that work on every screen, the sign-in form included.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => {
            let next = app
                .route()
                .nav_index()
                .map_or(0, |index| wrap_increment(index, NAV_LINKS.len()));
            app.navigate(NAV_LINKS[next].1);
            true
        }
        KeyCode::BackTab => {
            let previous = app
                .route()
                .nav_index()
                .map_or(0, |index| wrap_decrement(index, NAV_LINKS.len()));
            app.navigate(NAV_LINKS[previous].1);
            true
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            open_path_prompt(app);
            true
        }
        _ => false,
    }
}

/// Header and session shortcuts, only while no text field has focus.
pub fn handle_shell_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char(digit @ '1'..='3') => {
            if let Some(index) = "123".find(digit) {
                app.navigate(NAV_LINKS[index].1);
            }
        }
        KeyCode::Char('g') => open_path_prompt(app),
        KeyCode::Char('b') | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('o') if app.session.is_signed_in() => app.sign_out(),
        _ => return false,
    }
    true
}

fn open_path_prompt(app: &mut App) {
    app.path_prompt = Some(app.route().path().into_owned());
}
