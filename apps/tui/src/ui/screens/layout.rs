use crate::app::report::ReportState;
use crate::app::router::{Route, NAV_LINKS};
use crate::app::App;
use crate::ui::screens::{help, news, not_found, report, sign_in, video};
use crate::ui::widgets::popup::{bottom_strip, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

/// Persistent header, routed content area, status line and shortcuts.
pub fn render_shell(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, f, layout[0]);
    render_content(app, f, layout[1]);
    render_status_line(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);

    if let Some(input) = &app.path_prompt {
        render_path_prompt(input, f, layout[1]);
    }

    if app.show_help {
        let area = f.area();
        help::render_help_popup(f, area);
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let header_block = Block::default()
        .title("== Silver Zone ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = header_block.inner(area);
    f.render_widget(header_block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let titles = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(index, (label, _))| TextLine::from(format!("{} {label}", index + 1)))
        .collect::<Vec<_>>();

    let highlight = if app.route().nav_index().is_some() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };

    let tabs = Tabs::new(titles)
        .select(app.route().nav_index().unwrap_or(0))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(highlight)
        .divider(Span::raw("|"));
    f.render_widget(tabs, chunks[0]);

    f.render_widget(
        Paragraph::new(session_line(app)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Greeting and sign-out control when someone is signed in, otherwise the
/// sign-in prompt.
fn session_line(app: &App) -> TextLine<'_> {
    match app.session.user() {
        Some(user) => TextLine::from(vec![
            Span::styled(
                format!("Hello, {user}  "),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                "[o] Sign out",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => TextLine::from(Span::styled(
            "Please sign in!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    }
}

fn render_content(app: &App, f: &mut Frame<'_>, area: Rect) {
    if app.sign_in_required() {
        sign_in::render_sign_in(app, f, area);
        return;
    }

    match app.route() {
        Route::Home => {
            if let Some(view) = &app.report {
                report::render_report(view, &app.throbber, f, area);
            }
        }
        Route::News => news::render_news(app, f, area),
        Route::Video => video::render_videos(f, area),
        Route::NotFound(_) => not_found::render_not_found(f, area),
    }
}

fn render_status_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let path = Span::styled(
        format!(" {} ", app.route().path()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    );

    let message = if app.status_message.is_empty() {
        received_line(app)
    } else {
        app.status_message.clone()
    };

    let line = TextLine::from(vec![
        path,
        Span::raw(" "),
        Span::styled(message, Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn received_line(app: &App) -> String {
    match app.report.as_ref().map(|view| (view.year(), view.state())) {
        Some((year, ReportState::Ready { received_at, .. })) => {
            format!("{year} report received at {}", received_at.format("%H:%M:%S"))
        }
        _ => String::new(),
    }
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let hint = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled("F1", key),
        Span::styled(": Help | ", hint),
        Span::styled("Tab", key),
        Span::styled(": Next page | ", hint),
    ];

    if app.sign_in_required() {
        spans.extend([
            Span::styled("Enter", key),
            Span::styled(": Sign in | ", hint),
            Span::styled("Ctrl+C", key),
            Span::styled(": Quit", hint),
        ]);
    } else {
        if *app.route() == Route::Home {
            spans.extend([
                Span::styled("←/→", key),
                Span::styled(": Year | ", hint),
                Span::styled("m", key),
                Span::styled(": Map/Road view | ", hint),
            ]);
        }
        spans.extend([
            Span::styled("g", key),
            Span::styled(": Go to | ", hint),
            Span::styled("b", key),
            Span::styled(": Back | ", hint),
            Span::styled("q", key),
            Span::styled(": Quit", hint),
        ]);
    }

    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn render_path_prompt(input: &str, f: &mut Frame<'_>, area: Rect) {
    let prompt_area = bottom_strip(3, area);
    f.render_widget(ClearWidget, prompt_area);

    let block = Block::default()
        .title(" Go to path (Enter to open, Esc to cancel) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let line = TextLine::from(vec![
        Span::raw(input.to_string()),
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(line).block(block), prompt_area);
}
