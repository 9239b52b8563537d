use crate::models::app_state::AppState;
use crate::models::pattern::{AutomationAction, Pattern, PatternDetailView};

/// Shown instead of the automate control for discretionary patterns.
pub const MANUAL_ONLY_MESSAGE: &str =
    "This pattern requires manual judgment and cannot be automated.";

/// Looks up demo patterns and builds their detail views.
///
/// Missing ids are not errors: lookups return `None` and leave state alone.
pub struct PatternService;

impl PatternService {
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn find<'a>(&self, patterns: &'a [Pattern], id: &str) -> Option<&'a Pattern> {
        patterns.iter().find(|p| p.id == id)
    }

    /// Open the detail modal for `id`.
    pub fn show_details(&self, state: &mut AppState, id: &str) -> Option<PatternDetailView> {
        let pattern = self.find(&state.patterns, id)?;
        let view = self.detail_view(pattern, state.automated_patterns.contains(id));
        state.open_pattern = Some(pattern.id.clone());
        Some(view)
    }

    /// Flip the pattern's automate control to active and close the modal.
    /// Cosmetic: no rule engine sits behind it.
    pub fn automate(&self, state: &mut AppState, id: &str) -> Option<Pattern> {
        let pattern = self.find(&state.patterns, id)?.clone();
        state.automated_patterns.insert(pattern.id.clone());
        state.open_pattern = None;
        Some(pattern)
    }

    /// Returns `true` if a modal was open.
    pub fn close_details(&self, state: &mut AppState) -> bool {
        state.open_pattern.take().is_some()
    }

    #[must_use]
    pub fn detail_view(&self, pattern: &Pattern, already_active: bool) -> PatternDetailView {
        let action = if pattern.automatable {
            AutomationAction::Automate { already_active }
        } else {
            AutomationAction::ManualOnly(MANUAL_ONLY_MESSAGE.to_string())
        };
        PatternDetailView {
            pattern_id: pattern.id.clone(),
            title: format!("{} Analysis", pattern.name),
            overview: pattern.details.analysis.clone(),
            win_rate: pattern.details.performance.win_rate,
            avg_return: pattern.details.performance.avg_return,
            suggestions: pattern.details.suggestions.clone(),
            action,
        }
    }

    /// Toast text for a successful automation.
    #[must_use]
    pub fn automation_message(pattern: &Pattern) -> String {
        format!(
            "Successfully automated {}. The algorithm will monitor market conditions \
             and execute trades based on your patterns.",
            pattern.name
        )
    }
}

impl Default for PatternService {
    fn default() -> Self {
        Self::new()
    }
}
