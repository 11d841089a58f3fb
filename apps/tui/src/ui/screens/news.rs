use crate::app::App;
use crate::content::news::{Section, FEATURED};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_news(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" News ")
        .title_bottom(TextLine::from(" ↑/↓ PgUp/PgDn: Scroll ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    let paragraph = Paragraph::new(article_text())
        .block(block)
        .wrap(Wrap { trim: false });

    let total = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    let limit = total.saturating_sub(inner.height);
    app.news_scroll_limit.set(limit);

    f.render_widget(paragraph.scroll((app.news_scroll.min(limit), 0)), area);
}

fn article_text() -> Text<'static> {
    let muted = Style::default().fg(Color::Gray);
    let link = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);

    let mut lines = vec![
        TextLine::from(vec![Span::raw("News article - "), Span::styled(FEATURED.link, link)]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            FEATURED.headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            format!(
                "Published {}    Updated {}",
                FEATURED.published, FEATURED.updated
            ),
            muted,
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            FEATURED.subtitle,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    for section in FEATURED.body {
        match section {
            Section::Paragraph(text) => lines.push(TextLine::from(*text)),
            Section::Figure(figure) => {
                lines.push(TextLine::from(Span::styled(
                    format!("[image] {}", figure.caption),
                    muted.add_modifier(Modifier::ITALIC),
                )));
                lines.push(TextLine::from(Span::styled(figure.image_url, link)));
            }
        }
        lines.push(TextLine::from(""));
    }

    lines.push(TextLine::from(vec![
        Span::styled(FEATURED.reporter, muted),
        Span::raw(" "),
        Span::styled(FEATURED.reporter_email, muted),
    ]));
    lines.push(TextLine::from(""));
    for tag in FEATURED.tags {
        lines.push(TextLine::from(vec![
            Span::styled(
                tag.label,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(tag.link, muted),
        ]));
    }

    Text::from(lines)
}
