use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 14] = [
    ("F1", "Toggle this help popup"),
    ("Ctrl+C", "Quit from anywhere"),
    ("Tab / Shift+Tab", "Next / previous page in the header"),
    ("Ctrl+L, g", "Go to a path"),
    ("1 2 3", "Home, News, Video"),
    ("b, Backspace", "Back to the previous page"),
    ("o", "Sign out"),
    ("q", "Quit"),
    ("←/h, →/l", "Previous / next year"),
    ("m", "Switch between map and road view"),
    ("+ / -", "Zoom the map in / out"),
    ("↑/k, ↓/j", "Pick a road-view spot, or scroll the news"),
    ("PgUp / PgDn", "Scroll the news a page"),
    ("Enter", "Sign in / open the typed path"),
];

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(TextLine::from(" F1 or Esc to close ").alignment(Alignment::Center))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(vec![Span::styled(
            "Silver Zone",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        TextLine::from(""),
        TextLine::from(
            "Yearly hotspots of accidents involving elderly pedestrians in Bupyeong-gu, Incheon.",
        ),
        TextLine::from(""),
        TextLine::from(vec![Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
    ];

    lines.extend(SHORTCUTS.iter().map(|(keys, action)| {
        TextLine::from(vec![
            Span::styled(format!("  {keys}"), key),
            Span::raw(format!(" - {action}")),
        ])
    }));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(vec![Span::styled(
        "CLI Options:",
        Style::default().add_modifier(Modifier::BOLD),
    )]));

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}
