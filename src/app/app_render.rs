use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::controller::View;
use crate::detail::detail_render::render_detail;
use crate::notification::render_notification;
use crate::suggestions::suggestion_render::render_popup;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let screen = frame.area();
        let [input_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(screen);

        self.render_input(frame, input_area);

        match self.controller.view() {
            View::List => self.layout_regions.results = Some(body_area),
            View::Detail => {
                if let Some(regions) =
                    render_detail(frame, self.controller.detail_mut(), body_area, self.messages)
                {
                    self.layout_regions.detail = Some(regions.container);
                    self.layout_regions.detail_content = Some(regions.content);
                    self.layout_regions.back_control = Some(regions.back);
                }
            }
        }

        self.render_help_line(frame, help_area);

        self.layout_regions.suggestion_list = render_popup(
            frame,
            self.controller.list(),
            input_area,
            screen,
            self.messages.suggestions_title,
        );

        render_notification(frame, &self.notification, body_area);
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        if area.height < 3 {
            return;
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(self.messages.input_title)
            .border_style(Style::default().fg(Color::Cyan));

        if self.controller.is_searching() {
            block = block.title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.messages.searching),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ))
                .right_aligned(),
            );
        }

        self.input.textarea.set_block(block);
        frame.render_widget(&self.input.textarea, area);
        self.layout_regions.search_input = Some(area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let hint = match self.controller.view() {
            View::List => self.messages.list_hint,
            View::Detail => self.messages.detail_hint,
        };
        frame.render_widget(
            Paragraph::new(format!(" {}", hint)).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
