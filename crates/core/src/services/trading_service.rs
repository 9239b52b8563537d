use rand::Rng;

use crate::format::format_price;
use crate::models::order::TradeSide;
use crate::models::portfolio::PortfolioSnapshot;

/// Step added to the automation rate per implemented suggestion.
const AUTOMATION_RATE_STEP: u8 = 10;

/// Generic confirmation for suggestion ids without a dedicated message.
const DEFAULT_SUGGESTION_MESSAGE: &str = "Suggestion implemented successfully!";

/// Simulated trading actions. Nothing leaves the process.
pub struct TradingService;

impl TradingService {
    pub fn new() -> Self {
        Self
    }

    /// Title and message of the "order placed" toast.
    #[must_use]
    pub fn order_placed(&self, side: TradeSide, instrument: &str) -> (String, String) {
        (
            format!("{} Order Placed", side.label()),
            format!(
                "Market order to {} {instrument} at {} has been queued for execution.",
                side.label(),
                format_price(side.quote())
            ),
        )
    }

    /// Title and message of the delayed "order executed" toast.
    #[must_use]
    pub fn order_executed(&self, side: TradeSide) -> (String, String) {
        (
            "Order Executed".to_string(),
            format!(
                "Your {} order has been successfully executed at {}.",
                side.label(),
                format_price(side.quote())
            ),
        )
    }

    /// Book the simulated fill: today's PnL rises by a random whole amount
    /// in `[100, 600)`. Returns the increment.
    pub fn apply_fill<R: Rng + ?Sized>(&self, portfolio: &mut PortfolioSnapshot, rng: &mut R) -> f64 {
        let change = f64::from(rng.gen_range(100u32..600));
        portfolio.today_pnl += change;
        change
    }

    /// Confirmation text for an implemented suggestion; also bumps the
    /// automation rate (capped at 100).
    pub fn implement_suggestion(&self, portfolio: &mut PortfolioSnapshot, suggestion_id: &str) -> &'static str {
        portfolio.automation_rate = portfolio
            .automation_rate
            .saturating_add(AUTOMATION_RATE_STEP)
            .min(100);
        Self::suggestion_message(suggestion_id)
    }

    #[must_use]
    pub fn suggestion_message(suggestion_id: &str) -> &'static str {
        match suggestion_id {
            "rsi-auto" => "RSI Automation strategy has been implemented successfully!",
            "ma-alerts" => "Moving Average alerts have been configured and activated!",
            _ => DEFAULT_SUGGESTION_MESSAGE,
        }
    }

    #[must_use]
    pub fn automation_suggestion(&self, symbol: &str) -> String {
        format!(
            "Based on your trading history with {symbol}, we suggest setting up automatic \
             stop-loss at 15% and take-profit at 25%."
        )
    }
}

impl Default for TradingService {
    fn default() -> Self {
        Self::new()
    }
}
