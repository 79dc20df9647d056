use ratatui::{Frame, layout::Rect, widgets::Clear};
use unicode_width::UnicodeWidthChar;

/// Area directly under `anchor`, as wide as the anchor and clipped to `bounds`
///
/// Returns `None` when fewer than `min_height` rows fit.
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16, min_height: u16) -> Option<Rect> {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(popup_y);
    let popup_height = height.min(available);

    if popup_height < min_height {
        return None;
    }

    Some(Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: popup_height,
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Cut `text` to at most `max_width` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
