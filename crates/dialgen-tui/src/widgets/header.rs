//! Header bar: app title, selected country and directory size

use dialgen_app::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (status_icon, status_style) = if self.state.generation.is_in_flight() {
            ("◐", styles::status_yellow())
        } else if self.state.results.is_empty() {
            ("○", styles::text_muted())
        } else {
            ("●", styles::status_green())
        };

        let country = self
            .state
            .selected_country()
            .map(|c| c.label())
            .unwrap_or_else(|| "no country".to_string());

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(status_icon, status_style),
            Span::raw(" "),
            Span::styled("dialgen", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(country, styles::text_secondary()),
        ]);
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let right = format!("{} countries ", self.state.directory.len());
        let right_width = right.width() as u16;
        let left_width = left.width() as u16;
        if left_width + right_width < inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_string(x, inner.y, right, styles::text_muted());
        }
    }
}
