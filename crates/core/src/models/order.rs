use serde::{Deserialize, Serialize};

/// Side of a simulated quick trade from the chart overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }

    /// Fixed demo quote: bid/ask around the last traded 45.50.
    #[must_use]
    pub fn quote(&self) -> f64 {
        match self {
            TradeSide::Buy => 45.50,
            TradeSide::Sell => 45.30,
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
