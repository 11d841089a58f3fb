mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::{KeyEvent, KeyEventKind};

pub fn handle_input(app: &mut App, key: KeyEvent) {
    // Windows terminals also report releases.
    if key.kind != KeyEventKind::Press {
        return;
    }
    screens::dispatch_input(app, key);
}
