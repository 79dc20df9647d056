use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

/// Draw the current notification in the bottom-right corner of `area`
pub fn render_notification(frame: &mut Frame, state: &NotificationState, area: Rect) {
    let Some(notification) = state.current() else {
        return;
    };

    let max_text = area.width.saturating_sub(4) as usize;
    if max_text == 0 || area.height < 3 {
        return;
    }
    let text = popup::truncate_to_width(&notification.message, max_text);
    let width = text.width() as u16 + 4;

    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - 3,
        width,
        height: 3,
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    popup::clear_area(frame, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(format!(" {} ", text))
            .style(Style::default().fg(color))
            .block(block),
        rect,
    );
}
