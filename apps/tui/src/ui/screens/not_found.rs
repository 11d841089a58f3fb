use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_not_found(f: &mut Frame<'_>, area: Rect) {
    f.render_widget(Paragraph::new("404 NotFound"), area);
}
