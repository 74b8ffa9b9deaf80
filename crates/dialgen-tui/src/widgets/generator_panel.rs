//! Generator panel: selected country, count input and request state

use dialgen_app::state::{AppState, Focus, UiMode};
use dialgen_core::{MAX_COUNT, MIN_COUNT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const LABEL_WIDTH: usize = 9;

pub struct GeneratorPanel<'a> {
    state: &'a AppState,
}

impl<'a> GeneratorPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn focused(&self) -> bool {
        self.state.ui_mode == UiMode::Main && self.state.focus == Focus::CountInput
    }

    fn country_line(&self) -> Line<'static> {
        let country = match self.state.selected_country() {
            Some(c) => Span::styled(c.label(), styles::text_primary()),
            None => Span::styled("none selected", styles::status_red()),
        };
        Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Country", width = LABEL_WIDTH),
                styles::text_muted(),
            ),
            country,
            Span::raw("  "),
            Span::styled("F2", styles::keybinding()),
            Span::styled(" change", styles::text_muted()),
        ])
    }

    fn count_line(&self) -> Line<'static> {
        let input_style = if self.focused() {
            styles::accent_bold()
        } else {
            styles::text_primary()
        };
        let mut spans = vec![
            Span::styled(
                format!("{:<width$}", "Count", width = LABEL_WIDTH),
                styles::text_muted(),
            ),
            Span::styled(self.state.count_input.clone(), input_style),
        ];
        if self.focused() {
            spans.push(Span::styled("▏", styles::accent()));
        }
        spans.push(Span::styled(
            format!("  ({}-{})", MIN_COUNT, MAX_COUNT),
            styles::text_muted(),
        ));
        Line::from(spans)
    }

    fn status_line(&self) -> Line<'static> {
        let generation = &self.state.generation;
        if generation.is_in_flight() {
            return Line::from(Span::styled("◐ generating…", styles::status_yellow()));
        }
        if let Some(error) = &generation.error {
            return Line::from(Span::styled(format!("✗ {}", error), styles::status_red()));
        }
        match &self.state.results.results {
            Some(results) => Line::from(Span::styled(
                format!("✓ {} numbers for {}", results.len(), results.country_name),
                styles::status_green(),
            )),
            None => Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to generate", styles::text_muted()),
            ]),
        }
    }
}

impl Widget for GeneratorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused())
            .title(" Generate ")
            .title_style(styles::text_secondary());
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = [self.country_line(), self.count_line(), self.status_line()];
        for (row, line) in lines.iter().enumerate().take(inner.height as usize) {
            buf.set_line(
                inner.x + 1,
                inner.y + row as u16,
                line,
                inner.width.saturating_sub(1),
            );
        }
    }
}
