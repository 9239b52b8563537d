use crate::models::app_state::AppState;
use crate::models::view::{Navigation, Tab, View};

/// Tab selection and top-level view switching.
///
/// Keeps "exactly one tab active" and "exactly one view visible" true by
/// construction: both are single enum fields on `AppState`.
pub struct NavigationService;

impl NavigationService {
    pub fn new() -> Self {
        Self
    }

    /// Activate the tab whose label matches `name` (case-insensitive).
    /// Unknown names leave the current tab in place and return `None`.
    pub fn select_tab(&self, state: &mut AppState, name: &str) -> Option<Tab> {
        let tab = Tab::from_label(name)?;
        state.active_tab = tab;
        Some(tab)
    }

    /// Handle a nav-link click. `target` may carry a leading '#'.
    pub fn navigate(&self, state: &mut AppState, target: &str) -> Navigation {
        let section = target.trim().trim_start_matches('#').to_string();
        state.active_nav_link = Some(section.clone());

        match section.as_str() {
            "dashboard" => {
                state.active_view = View::Dashboard;
                Navigation::Shown(View::Dashboard)
            }
            "learn" => {
                state.active_view = View::Education;
                Navigation::Shown(View::Education)
            }
            _ => Navigation::Unrecognized(section),
        }
    }

    /// Which panel is visible. One entry per tab, exactly one `true`.
    #[must_use]
    pub fn visible_panels(&self, state: &AppState) -> Vec<(Tab, bool)> {
        Tab::ALL
            .into_iter()
            .map(|t| (t, t == state.active_tab))
            .collect()
    }
}

impl Default for NavigationService {
    fn default() -> Self {
        Self::new()
    }
}
