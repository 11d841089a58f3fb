use crate::adapters::{MapView, RoadviewPanel};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const MARKER_COLOR: Color = Color::Red;

/// Hotspot pins over a coastline backdrop, centered on the first record.
pub fn render_map(view: &MapView, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Map (level {}) ", view.level))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let Some(bounds) = view.bounds() else {
        let paragraph = Paragraph::new("No location to show")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let coords = view
        .markers
        .iter()
        .map(|marker| (marker.position.lng, marker.position.lat))
        .collect::<Vec<_>>();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(bounds.x)
        .y_bounds(bounds.y)
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color: MARKER_COLOR,
            });
            for (index, marker) in view.markers.iter().enumerate() {
                ctx.print(
                    marker.position.lng,
                    marker.position.lat,
                    Span::styled(
                        format!("{}", index + 1),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// Road-view panels as a selectable list plus the focused panel's details.
pub fn render_roadview(panels: &[RoadviewPanel], selected: usize, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Road view ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    if panels.is_empty() {
        let paragraph = Paragraph::new("No road view available")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(inner);

    let visible = usize::from(split[0].height);
    let offset = scroll_offset(panels.len(), visible, selected);

    let list_lines = panels
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, panel)| {
            let is_selected = index == selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if is_selected { ">" } else { " " };
            TextLine::from(Span::styled(
                format!("{prefix} {}. {}", index + 1, panel.title),
                style,
            ))
        })
        .collect::<Vec<_>>();

    f.render_widget(Paragraph::new(Text::from(list_lines)), split[0]);

    if let Some(panel) = panels.get(selected) {
        let label = Style::default().fg(Color::Gray);
        let details = vec![
            TextLine::from(vec![
                Span::styled("Position: ", label),
                Span::raw(format!(
                    "{:.6}, {:.6}",
                    panel.position.lat, panel.position.lng
                )),
            ]),
            TextLine::from(vec![
                Span::styled("Radius:   ", label),
                Span::raw(format!("{} m", panel.radius_m)),
            ]),
            TextLine::from(vec![
                Span::styled("Open:     ", label),
                Span::styled(panel.link(), Style::default().fg(Color::Cyan)),
            ]),
        ];
        let paragraph = Paragraph::new(Text::from(details))
            .block(Block::default().borders(Borders::TOP))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, split[1]);
    }
}
