use serde::{Deserialize, Serialize};

/// Instrument shown on the simulated chart.
pub const CHART_INSTRUMENT: &str = "NIFTY 21500 CE";

/// Timeframe selected at startup.
pub const DEFAULT_TIMEFRAME: &str = "1m";

/// A single point of the simulated price line.
///
/// Generated by the simulation; the rendering surface only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Minute timestamp label ("HH:MM")
    pub label: String,
    pub price: f64,
}

/// The series behind the chart panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub instrument: String,

    /// Label of the active timeframe button
    pub timeframe: String,

    pub points: Vec<ChartPoint>,
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self {
            instrument: CHART_INSTRUMENT.to_string(),
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            points: Vec::new(),
        }
    }
}

impl ChartSeries {
    #[must_use]
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    #[must_use]
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }
}
