use serde::{Deserialize, Serialize};

use super::position::Position;

/// Headline trading statistics shown in the assistant sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_trades: u32,

    /// Percent of profitable trades
    pub success_rate: u8,

    /// Average return per trade, in percent
    pub avg_return: f64,

    pub risk_score: String,
    pub experience: String,
}

/// The mock portfolio panel: headline figures plus open positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Total account value in rupees
    pub total_value: f64,

    /// Today's realized + unrealized PnL in rupees
    pub today_pnl: f64,

    pub positions: Vec<Position>,

    /// Share of trades handled by automation, percent (0..=100)
    pub automation_rate: u8,

    /// Education track completion, percent
    pub learning_progress: u8,
}

impl PortfolioSnapshot {
    /// Sum of the open positions' PnL.
    #[must_use]
    pub fn open_pnl(&self) -> f64 {
        self.positions.iter().map(|p| p.pnl).sum()
    }
}
