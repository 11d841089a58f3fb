use crate::adapters::ChartData;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph,
};
use ratatui::Frame;

const SERIES_COLORS: [Color; 3] = [
    Color::Rgb(136, 132, 216),
    Color::Rgb(130, 202, 157),
    Color::Red,
];

/// Occurrences, severe injuries and fatalities per hotspot, as three lines
/// over the spot positions.
pub fn render_accident_chart(chart: &ChartData, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Accidents by spot ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if chart.is_empty() {
        let paragraph = Paragraph::new("No spots to chart")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let series = chart.series();
    let datasets = series
        .iter()
        .zip(SERIES_COLORS)
        .map(|(line, color)| {
            Dataset::default()
                .name(line.label)
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&line.points)
        })
        .collect::<Vec<_>>();

    let x_max = chart.len().saturating_sub(1).max(1);
    let y_max = y_axis_top(chart);

    // Label only the ends and the middle; spot names do not fit side by side.
    let x_labels = [0, x_max / 2, x_max]
        .iter()
        .map(|&index| {
            let name = chart
                .points
                .get(index)
                .map_or(String::new(), |point| point.name.clone());
            Span::raw(name)
        })
        .collect::<Vec<_>>();

    let y_labels = vec![
        Span::raw("0"),
        Span::raw((y_max / 2).to_string()),
        Span::raw(y_max.to_string()),
    ];

    #[allow(clippy::cast_precision_loss)]
    let chart_widget = Chart::new(datasets)
        .block(block)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    "count",
                    Style::default().add_modifier(Modifier::ITALIC),
                ))
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, f64::from(y_max)])
                .labels(y_labels),
        );

    f.render_widget(chart_widget, area);
}

/// Upper bound of the count axis: one step above the largest count.
fn y_axis_top(chart: &ChartData) -> u32 {
    chart.max_value().max(1).saturating_add(1)
}
