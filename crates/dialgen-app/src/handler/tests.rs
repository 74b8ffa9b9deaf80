//! Tests for handler module

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::*;
use crate::input_key::InputKey;
use crate::message::{CopyTarget, Message};
use crate::state::{AppPhase, AppState, Focus, NoticeLevel, UiMode};
use dialgen_core::{countries, generate, ResultSet, SequenceSource};

/// Run a message and every follow-up, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

/// Copy target for a number in the current result set
fn number_target(state: &AppState, index: usize) -> CopyTarget {
    CopyTarget::Number {
        index,
        generated_at: state.results.generated_at().unwrap(),
    }
}

fn all_target(state: &AppState) -> CopyTarget {
    CopyTarget::All {
        generated_at: state.results.generated_at().unwrap(),
    }
}

fn press(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn type_count(state: &mut AppState, text: &str) {
    press(state, InputKey::CharCtrl('u'));
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

fn results_for(id: &str, count: u32) -> ResultSet {
    let country = countries::builtin()
        .iter()
        .find(|c| c.id == id)
        .unwrap();
    let mut rng = SequenceSource::new((0..10).collect::<Vec<_>>());
    generate(country, count, &mut rng).unwrap()
}

/// State with a completed result set and focus on the results
fn state_with_results(count: u32) -> AppState {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::Generate);
    let request_id = match &actions[0] {
        UpdateAction::Generate { request_id, .. } => *request_id,
        other => panic!("unexpected {:?}", other),
    };
    run(
        &mut state,
        Message::GenerationCompleted {
            request_id,
            results: results_for("us", count),
        },
    );
    state
}

// ─────────────────────────────────────────────────────────
// Quit & focus
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_every_mode() {
    let mut state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));

    state.focus = Focus::Results;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));

    state.ui_mode = UiMode::CountryPicker;
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_q_quits_only_from_results() {
    let mut state = AppState::new();
    assert!(handle_key(&state, InputKey::Char('q')).is_none());

    state.focus = Focus::Results;
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_tab_toggles_focus() {
    let mut state = AppState::new();
    press(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Results);
    press(&mut state, InputKey::BackTab);
    assert_eq!(state.focus, Focus::CountInput);
}

// ─────────────────────────────────────────────────────────
// Count input
// ─────────────────────────────────────────────────────────

#[test]
fn test_digits_edit_count_input() {
    let mut state = AppState::new();
    type_count(&mut state, "250");
    assert_eq!(state.count_input, "250");

    press(&mut state, InputKey::Backspace);
    assert_eq!(state.count_input, "25");

    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.count_input, "");
}

#[test]
fn test_non_digits_ignored_in_count_input() {
    let mut state = AppState::new();
    type_count(&mut state, "1a.2-");
    assert_eq!(state.count_input, "12");
}

#[test]
fn test_count_input_length_is_capped() {
    let mut state = AppState::new();
    type_count(&mut state, "123456789");
    assert_eq!(state.count_input, "123456");
}

#[test]
fn test_editing_clears_error() {
    let mut state = AppState::new();
    type_count(&mut state, "0");
    press(&mut state, InputKey::Enter);
    assert!(state.generation.error.is_some());

    press(&mut state, InputKey::Char('5'));
    assert!(state.generation.error.is_none());
}

// ─────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_starts_generation() {
    let mut state = AppState::new();
    type_count(&mut state, "5");

    let actions = press(&mut state, InputKey::Enter);

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        UpdateAction::Generate {
            country,
            count,
            seed,
            yield_ms,
            ..
        } => {
            assert_eq!(country.dial_code, "+1");
            assert_eq!(*count, 5);
            assert_eq!(*seed, None);
            assert_eq!(*yield_ms, 100);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(state.generation.is_in_flight());
}

#[test]
fn test_invalid_counts_never_reach_the_generator() {
    for input in ["0", "10001", "", "999999"] {
        let mut state = AppState::new();
        state.count_input = input.to_string();

        let result = update(&mut state, Message::Generate);

        assert!(result.action.is_none(), "{input:?} produced an action");
        assert!(!state.generation.is_in_flight());
        assert_eq!(
            state.generation.error.as_deref(),
            Some("enter a number between 1 and 10000")
        );
    }
}

#[test]
fn test_non_numeric_count_is_rejected() {
    let mut state = AppState::new();
    state.count_input = "-1".to_string();
    assert!(update(&mut state, Message::Generate).action.is_none());

    state.count_input = "abc".to_string();
    assert!(update(&mut state, Message::Generate).action.is_none());
}

#[test]
fn test_invalid_count_keeps_previous_results() {
    let mut state = state_with_results(10);
    state.count_input = "0".to_string();

    update(&mut state, Message::Generate);

    assert_eq!(state.results.len(), 10);
}

#[test]
fn test_generate_while_in_flight_is_ignored() {
    let mut state = AppState::new();
    assert_eq!(run(&mut state, Message::Generate).len(), 1);
    assert!(run(&mut state, Message::Generate).is_empty());
}

#[test]
fn test_new_request_discards_previous_results() {
    let mut state = state_with_results(10);
    run(&mut state, Message::Generate);
    assert!(state.results.results.is_none());
}

#[test]
fn test_completion_stores_results_and_focuses_list() {
    let state = state_with_results(120);
    assert_eq!(state.results.len(), 120);
    assert_eq!(state.results.pager.page(), 0);
    assert_eq!(state.focus, Focus::Results);
    assert!(!state.generation.is_in_flight());
}

#[test]
fn test_stale_completion_is_dropped() {
    let mut state = AppState::new();
    run(&mut state, Message::Generate);
    let current = state.generation.in_flight.unwrap();

    update(
        &mut state,
        Message::GenerationCompleted {
            request_id: current + 10,
            results: results_for("us", 3),
        },
    );

    assert!(state.results.results.is_none());
    assert!(state.generation.is_in_flight());
}

#[test]
fn test_generation_failure_surfaces_retry_prompt() {
    let mut state = AppState::new();
    run(&mut state, Message::Generate);
    let request_id = state.generation.in_flight.unwrap();

    update(
        &mut state,
        Message::GenerationFailed {
            request_id,
            error: "generation failed, please retry".to_string(),
        },
    );

    assert!(!state.generation.is_in_flight());
    assert!(state.results.results.is_none());
    assert_eq!(
        state.generation.error.as_deref(),
        Some("generation failed, please retry")
    );
}

#[test]
fn test_generate_uses_configured_seed_and_yield() {
    let mut state = AppState::new();
    state.settings.generator.seed = Some(9);
    state.settings.generator.yield_ms = 0;

    let actions = run(&mut state, Message::Generate);
    match &actions[0] {
        UpdateAction::Generate { seed, yield_ms, .. } => {
            assert_eq!(*seed, Some(9));
            assert_eq!(*yield_ms, 0);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_generate_has_haptic_pulse() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Generate);
    assert_eq!(
        result.haptic,
        Some(crate::services::haptics::PULSE_GENERATE)
    );
}

// ─────────────────────────────────────────────────────────
// Result browser
// ─────────────────────────────────────────────────────────

#[test]
fn test_result_paging_keys() {
    let mut state = state_with_results(120);

    press(&mut state, InputKey::Right);
    assert_eq!(state.results.pager.page(), 1);
    press(&mut state, InputKey::Char('n'));
    assert_eq!(state.results.pager.page(), 2);
    press(&mut state, InputKey::PageDown);
    assert_eq!(state.results.pager.page(), 2);

    press(&mut state, InputKey::Char('p'));
    assert_eq!(state.results.pager.page(), 1);
    press(&mut state, InputKey::Home);
    assert_eq!(state.results.pager.page(), 0);
    press(&mut state, InputKey::PageUp);
    assert_eq!(state.results.pager.page(), 0);
    press(&mut state, InputKey::End);
    assert_eq!(state.results.pager.page(), 2);
}

#[test]
fn test_cursor_keys_move_within_page() {
    let mut state = state_with_results(60);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);
    assert_eq!(state.results.cursor, 2);
    press(&mut state, InputKey::Up);
    assert_eq!(state.results.cursor, 1);
}

#[test]
fn test_copy_selected_uses_global_index() {
    let mut state = state_with_results(120);
    press(&mut state, InputKey::Right);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Down);

    let actions = press(&mut state, InputKey::Enter);

    let expected = state.results.numbers()[52].as_str().to_string();
    match &actions[..] {
        [UpdateAction::CopyToClipboard { text, target }] => {
            assert_eq!(*target, number_target(&state, 52));
            assert_eq!(*text, expected);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_y_copies_selected() {
    let mut state = state_with_results(3);
    let actions = press(&mut state, InputKey::Char('y'));
    assert!(matches!(
        &actions[..],
        [UpdateAction::CopyToClipboard {
            target: CopyTarget::Number { index: 0, .. },
            ..
        }]
    ));
}

#[test]
fn test_copy_all_payload_is_newline_join() {
    let mut state = state_with_results(75);
    let actions = press(&mut state, InputKey::Char('Y'));

    match &actions[..] {
        [UpdateAction::CopyToClipboard { text, target }] => {
            assert_eq!(*target, all_target(&state));
            assert!(!text.ends_with('\n'));
            let lines: Vec<&str> = text.split('\n').collect();
            assert_eq!(lines.len(), 75);
            for (line, number) in lines.iter().zip(state.results.numbers()) {
                assert_eq!(*line, number.as_str());
            }
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_copy_and_export_without_results_are_no_ops() {
    let mut state = AppState::new();
    state.focus = Focus::Results;

    assert!(press(&mut state, InputKey::Enter).is_empty());
    assert!(press(&mut state, InputKey::Char('Y')).is_empty());
    assert!(press(&mut state, InputKey::Char('e')).is_empty());
    assert!(run(&mut state, Message::CopyNumber { index: 0 }).is_empty());
}

#[test]
fn test_copy_success_sets_expiring_marker() {
    let mut state = state_with_results(10);
    let copied_at = Instant::now();

    let target = number_target(&state, 3);
    update(&mut state, Message::CopySucceeded { target, copied_at });

    assert!(state.results.is_copied(3, copied_at));
    assert!(state
        .results
        .is_copied(3, copied_at + Duration::from_millis(1499)));
    assert!(!state
        .results
        .is_copied(3, copied_at + Duration::from_millis(1500)));
    assert!(!state.results.is_copied(4, copied_at));
}

#[test]
fn test_copy_all_success_sets_confirmation() {
    let mut state = state_with_results(10);
    let copied_at = Instant::now();

    let target = all_target(&state);
    update(&mut state, Message::CopySucceeded { target, copied_at });

    assert!(state.results.copied_all_visible(copied_at));
    assert!(state
        .results
        .copied_all_visible(copied_at + Duration::from_millis(1999)));
    assert!(!state
        .results
        .copied_all_visible(copied_at + Duration::from_secs(2)));
}

#[test]
fn test_copy_reply_for_replaced_set_is_not_marked() {
    let mut state = state_with_results(10);
    let number = number_target(&state, 3);
    let all = all_target(&state);

    let actions = run(&mut state, Message::Generate);
    let request_id = match &actions[0] {
        UpdateAction::Generate { request_id, .. } => *request_id,
        other => panic!("unexpected {:?}", other),
    };
    let mut fresh = results_for("us", 10);
    fresh.generated_at = number.generated_at() + chrono::TimeDelta::seconds(1);
    run(
        &mut state,
        Message::GenerationCompleted {
            request_id,
            results: fresh,
        },
    );

    let copied_at = Instant::now();
    update(
        &mut state,
        Message::CopySucceeded {
            target: number,
            copied_at,
        },
    );
    update(
        &mut state,
        Message::CopySucceeded {
            target: all,
            copied_at,
        },
    );

    assert!(state.results.copied.is_none());
    assert!(!state.results.is_copied(3, copied_at));
    assert!(!state.results.copied_all_visible(copied_at));
}

#[test]
fn test_copy_failure_is_muted_notice() {
    let mut state = state_with_results(10);
    let target = number_target(&state, 0);
    update(
        &mut state,
        Message::CopyFailed {
            target,
            error: "stderr is not a terminal".to_string(),
        },
    );

    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Muted);
    assert!(notice.text.contains("copy failed"));
    assert!(!state.should_quit());
}

#[test]
fn test_export_action_carries_file_name_and_content() {
    let mut state = state_with_results(4);
    state.settings.export.directory = Some(PathBuf::from("/tmp/out"));

    let actions = press(&mut state, InputKey::Char('e'));

    let results = state.results.results.as_ref().unwrap();
    match &actions[..] {
        [UpdateAction::Export {
            directory,
            file_name,
            content,
        }] => {
            assert_eq!(*directory, PathBuf::from("/tmp/out"));
            assert_eq!(
                *file_name,
                format!(
                    "United_States_4_{}.txt",
                    results.generated_at.timestamp_millis()
                )
            );
            assert_eq!(*content, results.join_lines());
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_export_outcomes_set_notices() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::ExportCompleted {
            path: PathBuf::from("/tmp/x.txt"),
        },
    );
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Success);

    update(
        &mut state,
        Message::ExportFailed {
            error: "read-only".to_string(),
        },
    );
    assert_eq!(state.notice.as_ref().unwrap().level, NoticeLevel::Error);
}

#[test]
fn test_g_regenerates_from_results() {
    let mut state = state_with_results(10);
    let actions = press(&mut state, InputKey::Char('g'));
    assert!(matches!(&actions[..], [UpdateAction::Generate { .. }]));
}

// ─────────────────────────────────────────────────────────
// Country picker
// ─────────────────────────────────────────────────────────

#[test]
fn test_open_picker_from_anywhere() {
    for key in [InputKey::F(2), InputKey::CharCtrl('o')] {
        let mut state = AppState::new();
        press(&mut state, key);
        assert_eq!(state.ui_mode, UiMode::CountryPicker);
    }

    let mut state = state_with_results(5);
    press(&mut state, InputKey::Char('c'));
    assert_eq!(state.ui_mode, UiMode::CountryPicker);
}

#[test]
fn test_picker_opens_on_first_page_with_empty_query() {
    let mut state = AppState::new();
    state.picker.set_query(&state.directory.clone(), "ja".to_string());
    state.picker.pager.set_page(1, 100);

    run(&mut state, Message::OpenCountryPicker);

    assert_eq!(state.picker.query, "");
    assert_eq!(state.picker.pager.page(), 0);
    assert_eq!(state.picker.matches.len(), state.directory.len());
}

#[test]
fn test_typing_filters_and_resets_page() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenCountryPicker);
    press(&mut state, InputKey::Right);
    assert_eq!(state.picker.pager.page(), 1);

    for c in "UNITED".chars() {
        press(&mut state, InputKey::Char(c));
    }

    assert_eq!(state.picker.query, "UNITED");
    assert_eq!(state.picker.pager.page(), 0);
    let names: Vec<&str> = state
        .picker
        .matches
        .iter()
        .map(|&i| state.directory.get(i).unwrap().name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["United States", "United Kingdom", "United Arab Emirates"]
    );
}

#[test]
fn test_picker_backspace_and_clear() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenCountryPicker);
    for c in "ger".chars() {
        press(&mut state, InputKey::Char(c));
    }
    press(&mut state, InputKey::Backspace);
    assert_eq!(state.picker.query, "ge");
    press(&mut state, InputKey::CharCtrl('u'));
    assert_eq!(state.picker.query, "");
}

#[test]
fn test_picker_page_navigation_clamps() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenCountryPicker);
    let last = state.picker.pager.last_page(state.picker.matches.len());

    for _ in 0..10 {
        press(&mut state, InputKey::PageDown);
    }
    assert_eq!(state.picker.pager.page(), last);

    for _ in 0..10 {
        press(&mut state, InputKey::Left);
    }
    assert_eq!(state.picker.pager.page(), 0);
}

#[test]
fn test_picker_select_by_search_and_enter() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenCountryPicker);
    for c in "+44".chars() {
        press(&mut state, InputKey::Char(c));
    }

    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::Main);
    assert_eq!(state.selected_country_id, "gb");
    assert_eq!(state.selected_country().unwrap().name, "United Kingdom");
}

#[test]
fn test_picker_enter_with_no_matches_keeps_picker_open() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenCountryPicker);
    run(
        &mut state,
        Message::PickerQuery {
            text: "atlantis".to_string(),
        },
    );

    press(&mut state, InputKey::Enter);

    assert_eq!(state.ui_mode, UiMode::CountryPicker);
    assert_eq!(state.selected_country_id, "us");
}

#[test]
fn test_picker_esc_closes_without_selecting() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenCountryPicker);
    press(&mut state, InputKey::Down);
    press(&mut state, InputKey::Esc);

    assert_eq!(state.ui_mode, UiMode::Main);
    assert_eq!(state.selected_country_id, "us");
}

#[test]
fn test_picker_digits_go_to_query_not_count() {
    let mut state = AppState::new();
    let count = state.count_input.clone();
    run(&mut state, Message::OpenCountryPicker);
    press(&mut state, InputKey::Char('8'));

    assert_eq!(state.picker.query, "8");
    assert_eq!(state.count_input, count);
}

#[test]
fn test_select_unknown_country_is_ignored() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::CountryPicker;
    update(
        &mut state,
        Message::SelectCountry {
            id: "zz".to_string(),
        },
    );
    assert_eq!(state.selected_country_id, "us");
    assert_eq!(state.ui_mode, UiMode::CountryPicker);
}

#[test]
fn test_generation_uses_newly_selected_country() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::SelectCountry {
            id: "jp".to_string(),
        },
    );

    let actions = run(&mut state, Message::Generate);
    match &actions[0] {
        UpdateAction::Generate { country, .. } => assert_eq!(country.id, "jp"),
        other => panic!("unexpected {:?}", other),
    }
}
