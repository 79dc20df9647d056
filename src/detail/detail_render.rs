//! Detail view rendering
//!
//! Layout inside the bordered container:
//! back control, source link, blank line, then the scrollable extract.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{DetailContent, DetailState};
use crate::locale::Messages;

const HEADER_ROWS: u16 = 3;

/// Screen areas of the detail view, for hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRegions {
    pub container: Rect,
    pub content: Rect,
    pub back: Rect,
}

/// Render the open article into `area`
///
/// Returns `None` when no article is open.
pub fn render_detail(
    frame: &mut Frame,
    detail: &mut DetailState,
    area: Rect,
    messages: &Messages,
) -> Option<DetailRegions> {
    let (article, scroll) = detail.article_and_scroll()?;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", article.title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let back = Rect {
        width: (messages.back_hint.width() as u16).min(inner.width),
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(
        Paragraph::new(messages.back_hint).style(Style::default().fg(Color::Yellow)),
        back,
    );

    if inner.height > 1 {
        let source_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        let source = Line::from(vec![
            Span::styled(
                format!("{}: ", messages.source),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                article.url.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
        frame.render_widget(Paragraph::new(source), source_area);
    }

    let content = Rect {
        y: inner.y + HEADER_ROWS.min(inner.height),
        height: inner.height.saturating_sub(HEADER_ROWS),
        ..inner
    };

    let (body, style) = match &article.content {
        DetailContent::Loading => (
            messages.loading,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        ),
        DetailContent::Loaded(text) => (text.as_str(), Style::default().fg(Color::White)),
        DetailContent::Unavailable => (messages.content_unavailable, Style::default().fg(Color::DarkGray)),
        DetailContent::Failed => (messages.load_failed, Style::default().fg(Color::Red)),
    };

    let lines = wrap_lines(body, content.width as usize);
    scroll.update_bounds(lines.len() as u32, content.height);

    let paragraph = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(style)
        .scroll((scroll.offset, 0));
    frame.render_widget(paragraph, content);

    Some(DetailRegions {
        container: area,
        content,
        back,
    })
}

/// Greedy word wrap by display width; over-long words are split
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if current.is_empty() { word_width } else { word_width + 1 };

            if current_width + needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += needed;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for ch in word.chars() {
                    let w = ch.width().unwrap_or(0);
                    if current_width + w > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(ch);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "detail_render_tests.rs"]
mod detail_render_tests;
