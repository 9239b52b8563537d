//! Hardcoded demo content. Nothing here comes from a market feed.

use crate::models::pattern::{Pattern, PatternDetails, PatternPerformance};
use crate::models::portfolio::{PortfolioSnapshot, UserStats};
use crate::models::position::{InstrumentType, Position};
use crate::models::tour::TourStep;

/// Watchlist used when nothing (or nothing readable) is persisted.
pub const DEFAULT_WATCHLIST: [&str; 4] = ["NIFTY", "BANKNIFTY", "RELIANCE", "TCS"];

/// Automation rate shown before any suggestion is implemented.
pub const INITIAL_AUTOMATION_RATE: u8 = 40;

pub fn user_stats() -> UserStats {
    UserStats {
        total_trades: 156,
        success_rate: 68,
        avg_return: 12.4,
        risk_score: "Moderate".to_string(),
        experience: "Intermediate".to_string(),
    }
}

pub fn positions() -> Vec<Position> {
    vec![
        Position::new("NIFTY23DEC21000CE", 50, 45.50, 1250.0, InstrumentType::Call),
        Position::new("BANKNIFTY23DEC46000PE", 25, 89.20, -340.0, InstrumentType::Put),
    ]
}

pub fn portfolio() -> PortfolioSnapshot {
    PortfolioSnapshot {
        total_value: 485_600.0,
        today_pnl: 2_340.0,
        positions: positions(),
        automation_rate: INITIAL_AUTOMATION_RATE,
        learning_progress: 33,
    }
}

pub fn patterns() -> Vec<Pattern> {
    vec![
        pattern(
            "rsi",
            "RSI Oversold",
            23,
            74,
            "You often buy when RSI < 30",
            true,
            "Our AI detected that you consistently buy options when RSI drops below 30. \
             This pattern shows strong consistency and good success rate.",
            &[
                "Automate RSI-based entries with 30 threshold",
                "Add volume confirmation for better accuracy",
                "Set automatic stop-loss at 20% below entry",
            ],
            (18.5, 74, "2.3 hours", "+45%"),
        ),
        pattern(
            "ma",
            "Moving Average Cross",
            18,
            69,
            "Buying on moving average signals",
            true,
            "You frequently enter positions when 9 EMA crosses above 21 EMA. \
             This momentum-based strategy works well in trending markets.",
            &[
                "Set up automatic MA crossover alerts",
                "Add trend filter for better timing",
                "Consider position sizing based on trend strength",
            ],
            (14.2, 69, "4.1 hours", "+32%"),
        ),
        pattern(
            "support",
            "Support Bounce",
            31,
            81,
            "Trading near support levels",
            false,
            "You excel at identifying support level bounces manually. \
             This requires discretionary judgment and is best kept manual.",
            &[
                "Use alerts when price approaches key levels",
                "Create watchlists for support/resistance zones",
                "Document your support level identification rules",
            ],
            (22.1, 81, "1.8 hours", "+58%"),
        ),
    ]
}

pub fn tour_steps() -> Vec<TourStep> {
    vec![
        TourStep::new(
            ".header",
            "This is the header. Access navigation and account actions here.",
        ),
        TourStep::new(
            ".sidebar",
            "Assistant panel: detected patterns, suggestions and progress.",
        ),
        TourStep::new(".chart-section", "Live chart with quick trade overlay."),
        TourStep::new(
            ".positions-section",
            "View positions, orders and algorithms here.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn pattern(
    id: &str,
    name: &str,
    frequency: u32,
    success_rate: u8,
    description: &str,
    automatable: bool,
    analysis: &str,
    suggestions: &[&str],
    (avg_return, win_rate, avg_hold_time, best_performance): (f64, u8, &str, &str),
) -> Pattern {
    Pattern {
        id: id.to_string(),
        name: name.to_string(),
        frequency,
        success_rate,
        description: description.to_string(),
        automatable,
        details: PatternDetails {
            analysis: analysis.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            performance: PatternPerformance {
                avg_return,
                win_rate,
                avg_hold_time: avg_hold_time.to_string(),
                best_performance: best_performance.to_string(),
            },
        },
    }
}
