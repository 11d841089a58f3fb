use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_path_prompt_input(app: &mut App, key: KeyEvent) {
    let Some(input) = app.path_prompt.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.path_prompt = None;
        }
        KeyCode::Enter => {
            let path = std::mem::take(input);
            app.path_prompt = None;
            app.navigate(&path);
        }
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Char(ch) => input.push(ch),
        _ => {}
    }
}
