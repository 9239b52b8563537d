use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

use super::chart::ChartSeries;
use super::notification::Notification;
use super::onboarding::OnboardingState;
use super::pattern::Pattern;
use super::portfolio::{PortfolioSnapshot, UserStats};
use super::theme::ThemePreference;
use super::tour::TourState;
use super::view::{Tab, View};
use super::watchlist::Watchlist;

/// The main data container: everything a rendering surface reflects.
///
/// Services take `&mut AppState` (or a field of it) and return outcomes;
/// they never reach into a DOM. Only the watchlist and theme outlive a
/// session, through the key-value store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    pub onboarding: OnboardingState,

    pub active_tab: Tab,
    pub active_view: View,

    /// Last clicked nav target, without the leading '#'
    pub active_nav_link: Option<String>,

    pub watchlist: Watchlist,
    pub theme: ThemePreference,

    /// Visible toasts, oldest first
    pub notifications: VecDeque<Notification>,

    pub tour: TourState,

    pub chart: ChartSeries,

    /// Quick-trade overlay on top of the chart
    pub chart_overlay_visible: bool,

    pub portfolio: PortfolioSnapshot,
    pub user_stats: UserStats,

    /// Demo insight patterns
    pub patterns: Vec<Pattern>,

    /// Patterns whose "automate" control was flipped to active.
    /// Presentation only: nothing executes behind it.
    pub automated_patterns: BTreeSet<String>,

    /// Pattern id whose detail modal is open
    pub open_pattern: Option<String>,
}
