use uuid::Uuid;

use super::onboarding::OnboardingState;
use super::theme::ThemePreference;
use super::tour::TourState;
use super::view::{Tab, View};

/// A state change the rendering surface should reflect.
///
/// Carries just enough to know what to redraw; the full data is read back
/// from `AppState`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewChange {
    Onboarding(OnboardingState),
    Tab(Tab),
    View(View),
    /// Active nav link, without the leading '#'
    NavLink(String),
    Watchlist,
    Theme(ThemePreference),
    NotificationAdded(Uuid),
    NotificationRemoved(Uuid),
    Tour(TourState),
    /// The whole series was regenerated
    ChartReset,
    /// Only the last point moved
    ChartTick(f64),
    ChartOverlay(bool),
    /// Position PnL figures moved
    Positions,
    /// Headline portfolio or stats figures moved
    Portfolio,
    /// Pattern detail modal opened (`Some`) or closed (`None`)
    PatternModal(Option<String>),
    /// "Automate" control flipped to active for this pattern
    PatternAutomated(String),
}
