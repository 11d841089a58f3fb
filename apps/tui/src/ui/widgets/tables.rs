use crate::adapters::ChartData;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

/// First row to draw so that `selected_index` stays visible in a window of
/// `max_visible_rows`.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || selected_index < max_visible_rows {
        return 0;
    }

    selected_index + 1 - max_visible_rows
}

/// Per-spot counts behind the chart, one row per hotspot.
pub fn render_hotspot_table(chart: &ChartData, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(["#", "Spot", "Occ.", "Severe", "Deaths"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = chart.points.iter().enumerate().map(|(index, point)| {
        Row::new([
            Cell::from((index + 1).to_string()),
            Cell::from(point.name.clone()),
            Cell::from(point.occurrences.to_string()),
            Cell::from(point.severe_injuries.to_string()),
            Cell::from(point.fatalities.to_string()),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Hotspots ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_selection_in_view() {
        assert_eq!(scroll_offset(3, 5, 2), 0);
        assert_eq!(scroll_offset(10, 4, 2), 0);
        assert_eq!(scroll_offset(10, 4, 4), 1);
        assert_eq!(scroll_offset(10, 4, 9), 6);
    }
}
