//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use dialgen_app::state::{AppState, Focus, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{self, modal_overlay};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    view_at(frame, state, Instant::now());
}

/// Render with an explicit clock; expiring indicators are judged against `now`.
pub fn view_at(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(state), areas.header);
    frame.render_widget(widgets::GeneratorPanel::new(state), areas.generator);

    let results_focused = state.ui_mode == UiMode::Main && state.focus == Focus::Results;
    frame.render_widget(
        widgets::ResultList::new(&state.results, now).focused(results_focused),
        areas.results,
    );
    frame.render_widget(widgets::StatusBar::new(state, now), areas.status);

    if state.ui_mode == UiMode::CountryPicker {
        modal_overlay::dim_background(frame.buffer_mut(), area);
        let selected = state.selected_country_id.as_str();
        let picker = widgets::CountryPicker::new(&state.picker, &state.directory, selected);
        frame.render_widget(picker, area);
    }
}
