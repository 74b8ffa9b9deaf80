//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use dialgen_core::{
    CountryDirectory, CountryPhoneFormat, GeneratedNumber, Pager, ResultSet, MAX_COUNT,
};

use crate::config::Settings;

/// How long a status notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Longest count input accepted from the keyboard.
pub const MAX_COUNT_INPUT_LEN: usize = 6;

/// Lifecycle of the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Generator panel and result browser
    #[default]
    Main,

    /// Country picker modal over the main screen
    CountryPicker,
}

/// Which main-screen panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    CountInput,
    Results,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::CountInput => Focus::Results,
            Focus::Results => Focus::CountInput,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Low-key information (copy failures)
    Muted,
    Success,
    Error,
}

/// Transient one-line message in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, level: NoticeLevel, now: Instant) -> Self {
        Self {
            text: text.into(),
            level,
            expires_at: now + NOTICE_TTL,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Bookkeeping for the single in-flight generation request
#[derive(Debug, Clone, Default)]
pub struct GenerationState {
    /// Request currently running, if any
    pub in_flight: Option<u64>,

    next_request_id: u64,

    /// Last validation or generation error, shown under the count input
    pub error: Option<String>,
}

impl GenerationState {
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Mark a new request in flight and return its id.
    ///
    /// Returns `None` while another request is still running.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_request_id += 1;
        self.in_flight = Some(self.next_request_id);
        self.error = None;
        Some(self.next_request_id)
    }

    /// Close the in-flight request if `request_id` is the current one.
    ///
    /// Returns false for stale or unknown ids.
    pub fn finish(&mut self, request_id: u64) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Result Browser
// ─────────────────────────────────────────────────────────────────────────────

/// "copied" marker on one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopiedMarker {
    /// Global index into the result set
    pub index: usize,
    pub expires_at: Instant,
}

/// Paged view over the current result set
#[derive(Debug, Clone)]
pub struct ResultBrowserState {
    pub results: Option<ResultSet>,
    pub pager: Pager,

    /// Cursor row within the current page
    pub cursor: usize,

    pub copied: Option<CopiedMarker>,
    pub copied_all_until: Option<Instant>,
}

impl ResultBrowserState {
    pub fn new(page_size: usize) -> Self {
        Self {
            results: None,
            pager: Pager::new(page_size),
            cursor: 0,
            copied: None,
            copied_all_until: None,
        }
    }

    /// Replace the result set wholesale and rewind to the first page.
    pub fn set_results(&mut self, results: ResultSet) {
        self.results = Some(results);
        self.rewind();
    }

    /// Drop the current result set.
    pub fn clear(&mut self) {
        self.results = None;
        self.rewind();
    }

    fn rewind(&mut self) {
        self.pager.reset();
        self.cursor = 0;
        self.copied = None;
        self.copied_all_until = None;
    }

    /// Stamp of the current result set
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.results.as_ref().map(|r| r.generated_at)
    }

    pub fn numbers(&self) -> &[GeneratedNumber] {
        self.results
            .as_ref()
            .map(|r| r.numbers.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.numbers().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numbers on the current page
    pub fn page_numbers(&self) -> &[GeneratedNumber] {
        self.pager.slice(self.numbers())
    }

    /// Global index of the row under the cursor
    pub fn selected_index(&self) -> Option<usize> {
        if self.cursor < self.pager.items_on_page(self.len()) {
            Some(self.pager.global_index(self.cursor))
        } else {
            None
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let rows = self.pager.items_on_page(self.len());
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pager.next(self.len());
        self.clamp_cursor();
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.pager.prev();
        self.clamp_cursor();
        changed
    }

    pub fn first_page(&mut self) {
        self.pager.first();
        self.cursor = 0;
    }

    pub fn last_page(&mut self) {
        self.pager.last(self.len());
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let rows = self.pager.items_on_page(self.len());
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Whether the row at `index` shows the "copied" marker at `now`
    pub fn is_copied(&self, index: usize, now: Instant) -> bool {
        self.copied
            .map(|m| m.index == index && now < m.expires_at)
            .unwrap_or(false)
    }

    pub fn copied_all_visible(&self, now: Instant) -> bool {
        self.copied_all_until.map(|t| now < t).unwrap_or(false)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Country Picker
// ─────────────────────────────────────────────────────────────────────────────

/// Search, paging and cursor for the country picker modal
#[derive(Debug, Clone)]
pub struct CountryPickerState {
    pub query: String,

    /// Directory indices matching `query`, in directory order
    pub matches: Vec<usize>,

    pub pager: Pager,

    /// Cursor row within the current page
    pub cursor: usize,
}

impl CountryPickerState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            matches: Vec::new(),
            pager: Pager::new(page_size),
            cursor: 0,
        }
    }

    /// Reset to an empty query over the whole directory.
    pub fn open(&mut self, directory: &CountryDirectory) {
        self.set_query(directory, String::new());
    }

    /// Re-run the search and rewind to the first page.
    pub fn set_query(&mut self, directory: &CountryDirectory, query: String) {
        self.matches = directory.search(&query);
        self.query = query;
        self.pager.reset();
        self.cursor = 0;
    }

    /// Matches on the current page
    pub fn page_matches(&self) -> &[usize] {
        self.pager.slice(&self.matches)
    }

    /// Directory index under the cursor
    pub fn highlighted(&self) -> Option<usize> {
        self.page_matches().get(self.cursor).copied()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.page_matches().len() {
            self.cursor += 1;
        }
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pager.next(self.matches.len());
        if changed {
            self.cursor = 0;
        }
        changed
    }

    pub fn prev_page(&mut self) -> bool {
        let changed = self.pager.prev();
        if changed {
            self.cursor = 0;
        }
        changed
    }

    pub fn first_page(&mut self) {
        self.pager.first();
        self.cursor = 0;
    }

    pub fn last_page(&mut self) {
        self.pager.last(self.matches.len());
        self.cursor = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub focus: Focus,

    /// Built-in and custom countries
    pub directory: CountryDirectory,

    /// Identifier of the selected country
    pub selected_country_id: String,

    /// Raw text of the count input
    pub count_input: String,

    pub generation: GenerationState,
    pub results: ResultBrowserState,
    pub picker: CountryPickerState,
    pub notice: Option<Notice>,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let directory = CountryDirectory::with_custom(settings.countries.clone());
        Self::with_directory(settings, directory)
    }

    pub fn with_directory(settings: Settings, directory: CountryDirectory) -> Self {
        let selected_country_id = settings
            .default_country
            .as_deref()
            .and_then(|key| directory.find(key))
            .or_else(|| directory.get(0))
            .map(|c| c.id.clone())
            .unwrap_or_default();

        let count = settings.generator.default_count.min(MAX_COUNT);

        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Main,
            focus: Focus::CountInput,
            selected_country_id,
            count_input: count.to_string(),
            generation: GenerationState::default(),
            results: ResultBrowserState::new(settings.ui.results_page_size),
            picker: CountryPickerState::new(settings.ui.countries_page_size),
            notice: None,
            directory,
            settings,
        }
    }

    /// The selected country
    pub fn selected_country(&self) -> Option<&CountryPhoneFormat> {
        self.directory.by_id(&self.selected_country_id)
    }

    pub fn is_selected(&self, country: &CountryPhoneFormat) -> bool {
        country.id == self.selected_country_id
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn set_notice(&mut self, text: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice::new(text, level, Instant::now()));
    }

    /// Notice to draw at `now`, if it has not expired
    pub fn visible_notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible(now))
    }
}
