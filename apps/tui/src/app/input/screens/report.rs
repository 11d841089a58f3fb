use crate::adapters::MapMode;
use crate::app::report::ReportState;
use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_report_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.previous_year(),
        KeyCode::Right | KeyCode::Char('l') => app.next_year(),
        _ => handle_map_input(app, key),
    }
}

/// Map controls only mean something once data is on screen.
fn handle_map_input(app: &mut App, key: KeyEvent) {
    let Some(report) = app.report.as_mut() else {
        return;
    };
    let panel_count = match report.state() {
        ReportState::Ready { report, .. } if report.has_data() => report.records.len(),
        _ => return,
    };

    match key.code {
        KeyCode::Char('m') => report.map.toggle_mode(),
        KeyCode::Char('+' | '=') => report.map.zoom_in(),
        KeyCode::Char('-') => report.map.zoom_out(),
        KeyCode::Up | KeyCode::Char('k') if report.map.mode == MapMode::Roadview => {
            report.map.select_previous();
        }
        KeyCode::Down | KeyCode::Char('j') if report.map.mode == MapMode::Roadview => {
            report.map.select_next(panel_count);
        }
        _ => {}
    }
}
