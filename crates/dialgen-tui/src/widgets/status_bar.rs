//! Status bar: transient notice followed by key hints for the current mode

use std::time::Instant;

use dialgen_app::state::{AppState, Focus, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
    now: Instant,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, now: Instant) -> Self {
        Self { state, now }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.state.ui_mode, self.state.focus) {
            (UiMode::CountryPicker, _) => &[
                ("type", "search"),
                ("↑↓", "move"),
                ("←→", "page"),
                ("Enter", "select"),
                ("Esc", "close"),
            ],
            (UiMode::Main, Focus::CountInput) => &[
                ("0-9", "count"),
                ("Enter", "generate"),
                ("F2", "country"),
                ("Tab", "results"),
                ("^C", "quit"),
            ],
            (UiMode::Main, Focus::Results) => &[
                ("↑↓", "move"),
                ("←→", "page"),
                ("y", "copy"),
                ("Y", "copy all"),
                ("e", "export"),
                ("g", "generate"),
                ("c", "country"),
                ("Tab", "count"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        if let Some(notice) = self.state.visible_notice(self.now) {
            spans.push(Span::styled(notice.text.clone(), styles::notice(notice.level)));
            spans.push(Span::styled(" │ ", styles::text_muted()));
        }
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
