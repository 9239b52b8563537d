use serde::{Deserialize, Serialize};

/// Option contract kind. Displayed with the Indian market suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentType {
    /// Call option, shown as "CE"
    Call,
    /// Put option, shown as "PE"
    Put,
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentType::Call => write!(f, "CE"),
            InstrumentType::Put => write!(f, "PE"),
        }
    }
}

/// An open mock position. The PnL is mutated in place by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Contract symbol (e.g., "NIFTY23DEC21000CE")
    pub symbol: String,

    /// Lot quantity
    pub quantity: u32,

    /// Last traded price in rupees
    pub price: f64,

    /// Signed profit/loss in rupees
    pub pnl: f64,

    pub instrument: InstrumentType,
}

impl Position {
    pub fn new(
        symbol: impl Into<String>,
        quantity: u32,
        price: f64,
        pnl: f64,
        instrument: InstrumentType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            quantity,
            price,
            pnl,
            instrument,
        }
    }

    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.pnl >= 0.0
    }
}
