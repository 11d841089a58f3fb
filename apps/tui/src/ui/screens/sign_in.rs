use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// The one-field form that stands in for any gated screen.
pub fn render_sign_in(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Field
            Constraint::Length(1), // Validation
            Constraint::Min(0),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ]);

    let prompt = Paragraph::new(TextLine::from(Span::styled(
        "Please sign in!",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(prompt, rows[1]);

    let border = if app.sign_in_form.rejected {
        Color::Red
    } else {
        Color::Yellow
    };
    let field = Paragraph::new(TextLine::from(vec![
        Span::raw(app.sign_in_form.input.clone()),
        Span::styled("_", Style::default().fg(border)),
    ]))
    .block(
        Block::default()
            .title(" Username ")
            .title_bottom(TextLine::from(" Enter: Sign in ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(field, columns.split(rows[2])[1]);

    if app.sign_in_form.rejected {
        let warning = Paragraph::new(Span::styled(
            "Please fill out this field.",
            Style::default().fg(Color::Red),
        ))
        .alignment(Alignment::Center);
        f.render_widget(warning, rows[3]);
    }
}
