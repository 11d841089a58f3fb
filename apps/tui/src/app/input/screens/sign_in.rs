use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[allow(clippy::missing_const_for_fn)]
pub fn handle_sign_in_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_sign_in(),
        KeyCode::Backspace => app.sign_in_form.pop(),
        KeyCode::Esc => {
            app.sign_in_form.input.clear();
            app.status_message.clear();
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.sign_in_form.push(ch);
            app.status_message.clear();
        }
        _ => {}
    }
}
