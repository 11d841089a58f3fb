use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

/// F1 toggles the help popup. While it is open it swallows every key,
/// Esc closes it.
pub fn handle_help_toggle(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key.code == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}
