use crate::adapters::{ChartData, MapMode, MapView, RoadviewPanel};
use crate::app::report::{ReportBody, ReportDisplay, ReportView};
use crate::domain::YearSelection;
use crate::ui::widgets::accident_map::{render_map, render_roadview};
use crate::ui::widgets::line_chart::render_accident_chart;
use crate::ui::widgets::tables::render_hotspot_table;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

const TITLE: &str = "Bupyeong-gu, Incheon: elderly pedestrian accidents";

pub fn render_report(view: &ReportView, throbber: &ThrobberState, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {TITLE} "))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match view.display() {
        ReportDisplay::Fetching { year } => render_fetching(year, throbber, f, inner),
        ReportDisplay::Failed { year } => render_failed(year, f, inner),
        ReportDisplay::Ready {
            year,
            summary,
            body,
            ..
        } => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Year controls
                    Constraint::Length(2), // Summary
                    Constraint::Min(6),    // Chart and map
                ])
                .split(inner);

            render_year_controls(year, f, rows[0]);

            let summary = Paragraph::new(TextLine::from(Span::styled(
                summary,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center);
            f.render_widget(summary, rows[1]);

            match body {
                ReportBody::NoData => {
                    let empty =
                        Paragraph::new("No data for this year").alignment(Alignment::Center);
                    f.render_widget(empty, rows[2]);
                }
                ReportBody::Visuals {
                    chart,
                    map,
                    roadview,
                } => render_visuals(view, &chart, &map, &roadview, f, rows[2]),
            }
        }
    }
}

fn render_fetching(year: YearSelection, throbber: &ThrobberState, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let spinner = Throbber::default()
        .label("fetching data...")
        .style(Style::default().fg(Color::Cyan))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);
    // The widget advances its own copy; the app ticks the real state.
    let mut state = throbber.clone();
    f.render_stateful_widget(spinner, rows[0], &mut state);

    f.render_widget(pending_hint(year), rows[1]);
}

fn render_failed(year: YearSelection, f: &mut Frame<'_>, area: Rect) {
    let message = Paragraph::new(Span::styled(
        "failed to fetch",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    f.render_widget(message, rows[0]);
    f.render_widget(pending_hint(year), rows[1]);
}

fn pending_hint(year: YearSelection) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!("{year}  (←/→ to pick another year)"),
        Style::default().fg(Color::Gray),
    ))
}

fn render_year_controls(year: YearSelection, f: &mut Frame<'_>, area: Rect) {
    let key = Style::default().fg(Color::Yellow);
    let line = TextLine::from(vec![
        Span::styled("❮ Previous year [←]", key),
        Span::raw("     "),
        Span::styled(
            year.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("     "),
        Span::styled("[→] Next year ❯", key),
    ]);

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            "Choose the year to look up",
            Style::default().fg(Color::Gray),
        )),
        line,
    ]);
    f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_visuals(
    view: &ReportView,
    chart: &ChartData,
    map: &MapView,
    roadview: &[RoadviewPanel],
    f: &mut Frame<'_>,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[0]);

    render_accident_chart(chart, f, left[0]);
    render_hotspot_table(chart, f, left[1]);

    match view.map.mode {
        MapMode::Map => render_map(map, f, columns[1]),
        MapMode::Roadview => render_roadview(roadview, view.map.selected, f, columns[1]),
    }
}
