use crate::content::video::VIDEOS;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// A terminal cannot host a player, so each entry shows where to watch it.
pub fn render_videos(f: &mut Frame<'_>, area: Rect) {
    let label = Style::default().fg(Color::Gray);
    let link = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);

    let mut lines = Vec::new();
    for (index, video) in VIDEOS.iter().enumerate() {
        lines.push(TextLine::from(Span::styled(
            format!("{}. {}", index + 1, video.heading),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(vec![
            Span::styled("   Title: ", label),
            Span::raw(video.title),
        ]));
        lines.push(TextLine::from(vec![
            Span::styled("   Embed: ", label),
            Span::styled(video.embed_url, link),
        ]));
        lines.push(TextLine::from(vec![
            Span::styled("   Watch: ", label),
            Span::styled(video.watch_url(), link),
        ]));
        lines.push(TextLine::from(""));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Related videos ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
