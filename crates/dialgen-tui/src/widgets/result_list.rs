//! Paged result list with copy indicators

use std::time::Instant;

use chrono::Local;
use dialgen_app::state::ResultBrowserState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::scroll_offset;
use crate::layout::visible_result_rows;
use crate::theme::styles;

pub struct ResultList<'a> {
    browser: &'a ResultBrowserState,
    focused: bool,
    now: Instant,
}

impl<'a> ResultList<'a> {
    pub fn new(browser: &'a ResultBrowserState, now: Instant) -> Self {
        Self {
            browser,
            focused: false,
            now,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// "N numbers • page x/y" plus the copy-all confirmation while it lasts
    fn summary_line(&self) -> Line<'static> {
        let len = self.browser.len();
        let (page, total) = self.browser.pager.position(len);
        let mut spans = vec![Span::styled(
            format!("{} numbers • page {}/{}", len, page, total),
            styles::text_secondary(),
        )];
        if self.browser.copied_all_visible(self.now) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("✓ copied all", styles::status_green()));
        }
        Line::from(spans)
    }

    fn row_line(&self, global: usize, number: &str, highlighted: bool) -> Line<'static> {
        let number_style = if highlighted {
            if self.focused {
                styles::focused_selected()
            } else {
                styles::selected_highlight()
            }
        } else {
            styles::text_primary()
        };

        let mut spans = vec![
            Span::styled(format!("{:>6}  ", global + 1), styles::text_muted()),
            Span::styled(format!(" {} ", number), number_style),
        ];
        if self.browser.is_copied(global, self.now) {
            spans.push(Span::raw(" "));
            spans.push(Span::styled("copied", styles::status_green()));
        }
        Line::from(spans)
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused)
            .title(" Results ")
            .title_style(styles::text_secondary());
        if let Some(results) = &self.browser.results {
            let stamp = results.generated_at.with_timezone(&Local).format("%H:%M:%S");
            block = block.title_bottom(Line::styled(
                format!(" {} • {} ", results.country_name, stamp),
                styles::text_muted(),
            ));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width.saturating_sub(1);
        if self.browser.is_empty() {
            let hint = Line::from(vec![
                Span::styled("No numbers yet. Type a count and press ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
            ]);
            buf.set_line(inner.x + 1, inner.y, &hint, width);
            return;
        }

        buf.set_line(inner.x + 1, inner.y, &self.summary_line(), width);

        let rows = visible_result_rows(area);
        let page = self.browser.page_numbers();
        let offset = scroll_offset(self.browser.cursor, rows);
        let pager = &self.browser.pager;

        for (row, (local, number)) in page
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let global = pager.global_index(local);
            let line = self.row_line(global, number.as_str(), local == self.browser.cursor);
            buf.set_line(inner.x + 1, inner.y + 1 + row as u16, &line, width);
        }
    }
}
