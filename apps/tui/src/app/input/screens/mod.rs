use crate::app::router::Route;
use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

mod help;
mod news;
mod path_prompt;
mod report;
mod shell;
mod sign_in;

pub fn dispatch_input(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.path_prompt.is_some() {
        path_prompt::handle_path_prompt_input(app, key);
        return;
    }

    if shell::handle_global_keys(app, key) {
        return;
    }

    // The sign-in field takes every printable key.
    if app.sign_in_required() {
        sign_in::handle_sign_in_input(app, key);
        return;
    }

    if shell::handle_shell_keys(app, key) {
        return;
    }

    match app.route() {
        Route::Home => report::handle_report_input(app, key),
        Route::News => news::handle_news_input(app, key),
        Route::Video | Route::NotFound(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::report::ReportView;
    use crate::app::state::tests::{three_spots, RecordingSource};
    use crate::domain::YearSelection;
    use crossterm::event::KeyEventKind;

    fn press(app: &mut App, code: KeyCode) {
        crate::app::handle_input(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[tokio::test]
    async fn test_sign_in_form_takes_letters_before_shortcuts() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source.clone(), YearSelection::new(2015), "/");

        type_text(&mut app, "quo");
        assert!(app.running);
        assert_eq!(app.sign_in_form.input, "quo");

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session.user().map(|user| user.as_str().to_string()),
            Some("quo".to_string())
        );
        assert_eq!(source.years(), vec![2015]);
    }

    #[tokio::test]
    async fn test_empty_submit_keeps_the_gate_closed() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source.clone(), YearSelection::new(2015), "/news");

        press(&mut app, KeyCode::Enter);
        assert!(app.sign_in_required());
        assert!(app.sign_in_form.rejected);
        assert!(source.years().is_empty());
    }

    #[tokio::test]
    async fn test_typing_after_rejection_clears_the_warning() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source, YearSelection::new(2015), "/");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "Please fill out this field.");

        press(&mut app, KeyCode::Char('A'));
        assert!(!app.sign_in_form.rejected);
        assert!(app.status_message.is_empty());
    }

    #[tokio::test]
    async fn test_arrow_keys_step_the_year() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source.clone(), YearSelection::new(2015), "/");
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Left);

        assert_eq!(source.years(), vec![2015, 2016, 2017, 2016]);
        assert_eq!(
            app.report.as_ref().map(ReportView::year),
            Some(YearSelection::new(2016))
        );
    }

    #[tokio::test]
    async fn test_path_prompt_reaches_unknown_route() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source, YearSelection::new(2015), "/");

        press(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);

        crate::app::handle_input(
            &mut app,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
        );
        assert!(app.path_prompt.is_some());
        type_text(&mut app, "/admin");
        press(&mut app, KeyCode::Enter);

        assert!(app.path_prompt.is_none());
        assert_eq!(app.route(), &Route::NotFound("/admin".to_string()));
        assert!(!app.sign_in_required());

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_tab_cycles_header_links_and_release_is_ignored() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source, YearSelection::new(2015), "/");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), &Route::News);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.route(), &Route::Video);

        let mut release = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        crate::app::handle_input(&mut app, release);
        assert_eq!(app.route(), &Route::Video);
    }

    #[tokio::test]
    async fn test_sign_out_key_returns_to_form() {
        let source = RecordingSource::answering(three_spots);
        let mut app = App::new(source, YearSelection::new(2015), "/");
        type_text(&mut app, "Alice");
        press(&mut app, KeyCode::Enter);
        assert!(app.report.is_some());

        press(&mut app, KeyCode::Char('o'));
        assert!(!app.session.is_signed_in());
        assert!(app.report.is_none());
    }
}
