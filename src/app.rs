//! Application state management for Envsafe CLI
//!
//! This module contains the main application state, handling keyboard input
//! and state transitions between the location list and the profile detail
//! view. All UI state lives in this one explicit, serializable struct and is
//! only mutated through the named handlers below.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use serde::Serialize;
use std::collections::HashMap;

use crate::data::{watchlist, Location};
use crate::profile::{synthesize, LocationProfile};

/// Upper bound for the detail view scroll offset
const DETAIL_MAX_SCROLL: u16 = 40;

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AppState {
    /// List view showing all locations
    LocationList,
    /// Detail view for a specific location
    ProfileDetail(String),
}

/// Main application struct managing state and data
#[derive(Debug, Serialize)]
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Index of currently selected location in list view
    pub selected_index: usize,
    /// Locations shown in the list (watchlist, search results, or ad-hoc)
    pub locations: Vec<Location>,
    /// Synthesized profiles keyed by location ID
    pub profiles: HashMap<String, LocationProfile>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Scroll offset for profile detail view
    pub detail_scroll_offset: u16,
    /// Whether the series chart is expanded in detail view
    pub chart_expanded: bool,
    /// When the current profiles were generated
    pub generated_at: Option<DateTime<Local>>,
}

impl App {
    /// Creates a new App instance over the built-in watchlist
    pub fn new() -> Self {
        Self::with_locations(watchlist())
    }

    /// Creates a new App instance over a specific location list
    ///
    /// Used for search results and ad-hoc `--at` coordinates. Profiles are
    /// synthesized immediately; synthesis is pure and effectively free.
    pub fn with_locations(locations: Vec<Location>) -> Self {
        let mut app = Self {
            state: AppState::LocationList,
            selected_index: 0,
            locations,
            profiles: HashMap::new(),
            should_quit: false,
            show_help: false,
            detail_scroll_offset: 0,
            chart_expanded: false,
            generated_at: None,
        };
        app.rebuild_profiles();
        app
    }

    /// Synthesizes profiles for every listed location
    ///
    /// Locations with non-finite coordinates (which cannot come from the
    /// watchlist or the CLI parser) are silently skipped.
    pub fn rebuild_profiles(&mut self) {
        self.profiles.clear();
        for location in &self.locations {
            if let Ok(profile) = synthesize(location.latitude, location.longitude, &location.name) {
                self.profiles.insert(location.id.clone(), profile);
            }
        }
        self.generated_at = Some(Local::now());
    }

    /// Opens the detail view for a location ID directly (from --at startup)
    pub fn focus(&mut self, location_id: &str) {
        if self.profiles.contains_key(location_id) {
            self.state = AppState::ProfileDetail(location_id.to_string());
        }
    }

    /// Returns the total number of listed locations
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Returns the currently selected location, if any
    pub fn selected_location(&self) -> Option<&Location> {
        self.locations.get(self.selected_index)
    }

    /// Gets the synthesized profile for a specific location ID
    pub fn get_profile(&self, location_id: &str) -> Option<&LocationProfile> {
        self.profiles.get(location_id)
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc` (in LocationList): Quit the application
    /// - `Up`/`k`, `Down`/`j`: Move selection in list / scroll in detail
    /// - `Enter`: Open detail view for the selected location
    /// - `Esc` (in ProfileDetail): Go back to list view
    /// - `g`/`G` (in ProfileDetail): Scroll to top/bottom
    /// - `c` (in ProfileDetail): Toggle expanded series chart
    /// - `?`: Toggle help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys while shown
        if self.show_help {
            match key_event.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match self.state {
            AppState::LocationList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.move_selection_up();
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.move_selection_down();
                }
                KeyCode::Enter => {
                    if let Some(location) = self.selected_location() {
                        self.state = AppState::ProfileDetail(location.id.clone());
                    }
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
            AppState::ProfileDetail(_) => match key_event.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Esc => {
                    self.reset_detail_view_state();
                    self.state = AppState::LocationList;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.scroll_down();
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.scroll_up();
                }
                KeyCode::Char('g') => {
                    self.scroll_to_top();
                }
                KeyCode::Char('G') => {
                    self.scroll_to_bottom();
                }
                KeyCode::Char('c') => {
                    self.toggle_chart();
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                }
                _ => {}
            },
        }
    }

    /// Moves the selection up in the list, wrapping to bottom if at top
    fn move_selection_up(&mut self) {
        let count = self.location_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the selection down in the list, wrapping to top if at bottom
    fn move_selection_down(&mut self) {
        let count = self.location_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Scrolls down in the detail view with bounds checking
    fn scroll_down(&mut self) {
        self.detail_scroll_offset = (self.detail_scroll_offset + 1).min(DETAIL_MAX_SCROLL);
    }

    /// Scrolls up in the detail view
    fn scroll_up(&mut self) {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
    }

    /// Scrolls to the top of the detail view
    fn scroll_to_top(&mut self) {
        self.detail_scroll_offset = 0;
    }

    /// Scrolls to the bottom of the detail view
    fn scroll_to_bottom(&mut self) {
        self.detail_scroll_offset = DETAIL_MAX_SCROLL;
    }

    /// Toggles the expanded series chart in the detail view
    fn toggle_chart(&mut self) {
        self.chart_expanded = !self.chart_expanded;
    }

    /// Resets detail-view-only state when leaving the detail view
    fn reset_detail_view_state(&mut self) {
        self.detail_scroll_offset = 0;
        self.chart_expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::with_locations(vec![
            Location::new("a", "Alpha", 10.0, 20.0),
            Location::new("b", "Beta", -30.0, 40.0),
            Location::new("c", "Gamma", 50.0, -60.0),
        ])
    }

    #[test]
    fn test_new_app_starts_in_list_with_watchlist_profiles() {
        let app = App::new();
        assert_eq!(app.state, AppState::LocationList);
        assert_eq!(app.profiles.len(), app.locations.len());
        assert!(app.generated_at.is_some());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_profiles_are_keyed_by_location_id() {
        let app = test_app();
        let profile = app.get_profile("b").expect("profile for b");
        assert_eq!(profile.name, "Beta");
        assert_eq!(profile.coordinates.lat, -30.0);
    }

    #[test]
    fn test_selection_wraps_both_directions() {
        let mut app = test_app();
        assert_eq!(app.selected_index, 0);

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_index, 2, "Up from top wraps to bottom");

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_index, 0, "Down from bottom wraps to top");

        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.selected_index, 1);
        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_enter_opens_detail_for_selected_location() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::ProfileDetail("b".to_string()));
    }

    #[test]
    fn test_esc_in_detail_returns_to_list_and_resets_view() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Char('c')));
        assert!(app.detail_scroll_offset > 0);
        assert!(app.chart_expanded);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state, AppState::LocationList);
        assert_eq!(app.detail_scroll_offset, 0);
        assert!(!app.chart_expanded);
    }

    #[test]
    fn test_q_quits_from_both_views() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_in_list_quits() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_detail_scroll_is_bounded() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Enter));

        app.handle_key(key(KeyCode::Char('k')));
        assert_eq!(app.detail_scroll_offset, 0, "Cannot scroll above top");

        app.handle_key(key(KeyCode::Char('G')));
        let bottom = app.detail_scroll_offset;
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.detail_scroll_offset, bottom, "Cannot scroll past bottom");

        app.handle_key(key(KeyCode::Char('g')));
        assert_eq!(app.detail_scroll_offset, 0);
    }

    #[test]
    fn test_help_overlay_intercepts_keys() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);

        // Navigation is ignored while help is shown
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_index, 0);

        // q closes help instead of quitting
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_focus_opens_detail_for_known_id() {
        let mut app = test_app();
        app.focus("c");
        assert_eq!(app.state, AppState::ProfileDetail("c".to_string()));
    }

    #[test]
    fn test_focus_ignores_unknown_id() {
        let mut app = test_app();
        app.focus("missing");
        assert_eq!(app.state, AppState::LocationList);
    }

    #[test]
    fn test_empty_location_list_is_safe() {
        let mut app = App::with_locations(Vec::new());
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::LocationList);
    }

    #[test]
    fn test_app_state_is_serializable() {
        let app = test_app();
        let json = serde_json::to_string(&app).expect("App state should serialize");
        assert!(json.contains("\"LocationList\""));
        assert!(json.contains("\"locations\""));
    }
}
