//! Country picker modal
//!
//! Search line, match summary, the current page of matching countries and a
//! pager footer. The selected country carries a check mark; the cursor row is
//! highlighted.

use dialgen_app::state::CountryPickerState;
use dialgen_core::CountryDirectory;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::modal_overlay::centered_rect;
use super::{scroll_offset, truncate_to_width};
use crate::theme::styles;

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 24;

pub struct CountryPicker<'a> {
    picker: &'a CountryPickerState,
    directory: &'a CountryDirectory,
    selected_id: &'a str,
}

impl<'a> CountryPicker<'a> {
    pub fn new(
        picker: &'a CountryPickerState,
        directory: &'a CountryDirectory,
        selected_id: &'a str,
    ) -> Self {
        Self {
            picker,
            directory,
            selected_id,
        }
    }

    /// Modal rect inside the full screen area
    pub fn modal_area(area: Rect) -> Rect {
        centered_rect(
            MODAL_WIDTH.min(area.width.saturating_sub(4)),
            MODAL_HEIGHT.min(area.height.saturating_sub(2)),
            area,
        )
    }

    fn query_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Search: ", styles::text_muted())];
        if self.picker.query.is_empty() {
            spans.push(Span::styled("▏", styles::accent()));
            spans.push(Span::styled("name, id or +code", styles::text_muted()));
        } else {
            spans.push(Span::styled(self.picker.query.clone(), styles::accent_bold()));
            spans.push(Span::styled("▏", styles::accent()));
        }
        Line::from(spans)
    }

    fn summary_line(&self) -> Line<'static> {
        let len = self.picker.matches.len();
        let (page, total) = self.picker.pager.position(len);
        Line::styled(
            format!("{} countries • page {}/{}", len, page, total),
            styles::text_secondary(),
        )
    }

    fn footer_line(&self) -> Line<'static> {
        let len = self.picker.matches.len();
        let pager = &self.picker.pager;
        let prev_style = if pager.has_prev() {
            styles::keybinding()
        } else {
            styles::text_muted()
        };
        let next_style = if pager.has_next(len) {
            styles::keybinding()
        } else {
            styles::text_muted()
        };
        Line::from(vec![
            Span::styled("← prev", prev_style),
            Span::raw("  "),
            Span::styled("next →", next_style),
            Span::styled("   Enter", styles::keybinding()),
            Span::styled(" select", styles::text_muted()),
            Span::styled("  Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ])
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let page = self.picker.page_matches();
        if page.is_empty() {
            buf.set_line(
                area.x,
                area.y,
                &Line::styled("no matching countries", styles::text_muted()),
                area.width,
            );
            return;
        }

        let rows = area.height as usize;
        let offset = scroll_offset(self.picker.cursor, rows);
        let name_width = (area.width as usize).saturating_sub(16);

        let visible = page.iter().enumerate().skip(offset).take(rows);
        for (row, (local, &index)) in visible.enumerate() {
            let Some(country) = self.directory.get(index) else {
                continue;
            };
            let highlighted = local == self.picker.cursor;
            let selected = country.id == self.selected_id;

            let row_style = if highlighted {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            let marker = if selected {
                Span::styled("✓ ", styles::status_green())
            } else {
                Span::raw("  ")
            };
            let line = Line::from(vec![
                marker,
                Span::styled(format!("{} ", country.flag), row_style),
                Span::styled(truncate_to_width(&country.name, name_width), row_style),
                Span::raw(" "),
                Span::styled(country.dial_code.clone(), styles::text_muted()),
            ]);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

impl Widget for CountryPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = Self::modal_area(area);
        Clear.render(modal, buf);

        let block = styles::modal_block("Select Country");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 4 || inner.width < 10 {
            return;
        }

        let inner = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let [query, summary, list, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        buf.set_line(query.x, query.y, &self.query_line(), query.width);
        buf.set_line(summary.x, summary.y, &self.summary_line(), summary.width);
        self.render_list(list, buf);
        buf.set_line(footer.x, footer.y, &self.footer_line(), footer.width);
    }
}
