use serde::{Deserialize, Serialize};

/// Historical performance figures attached to a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPerformance {
    /// Average return per trade, in percent
    pub avg_return: f64,

    /// Share of winning trades, in percent
    pub win_rate: u8,

    /// Human-readable average holding time (e.g., "2.3 hours")
    pub avg_hold_time: String,

    /// Best single outcome, preformatted (e.g., "+45%")
    pub best_performance: String,
}

/// Narrative payload shown in the pattern detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDetails {
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub performance: PatternPerformance,
}

/// A precomputed trading behavior surfaced to the user as an insight.
///
/// Demo content: read-only at runtime. Whether the user clicked
/// "automate" is tracked on `AppState`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Stable identifier (e.g., "rsi", "ma", "support")
    pub id: String,

    /// Display name (e.g., "RSI Oversold")
    pub name: String,

    /// How many times the behavior was observed
    pub frequency: u32,

    /// Success rate in percent
    pub success_rate: u8,

    pub description: String,

    /// Whether the pattern can be handed to an automated rule
    pub automatable: bool,

    pub details: PatternDetails,
}

/// What the detail view offers below the suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AutomationAction {
    /// An "automate this pattern" control, possibly already activated
    Automate { already_active: bool },
    /// A fixed explanation that the pattern needs discretionary judgment
    ManualOnly(String),
}

/// Everything the rendering surface needs to draw the pattern modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDetailView {
    pub pattern_id: String,
    pub title: String,
    pub overview: String,
    pub win_rate: u8,
    pub avg_return: f64,
    pub suggestions: Vec<String>,
    pub action: AutomationAction,
}
