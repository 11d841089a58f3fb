use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

const PAGE: u16 = 10;

pub fn handle_news_input(app: &mut App, key: KeyEvent) {
    let limit = app.news_scroll_limit.get();
    let scroll = match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.news_scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => app.news_scroll.saturating_add(1),
        KeyCode::PageUp => app.news_scroll.saturating_sub(PAGE),
        KeyCode::PageDown | KeyCode::Char(' ') => app.news_scroll.saturating_add(PAGE),
        KeyCode::Home => 0,
        KeyCode::End => limit,
        _ => return,
    };
    app.news_scroll = scroll.min(limit);
}
