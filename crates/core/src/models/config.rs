use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Storage key holding the JSON array of watchlist symbols.
pub const WATCHLIST_KEY: &str = "nubra_watchlist";

/// Storage key holding the literal `"light"` or `"dark"`.
pub const THEME_KEY: &str = "nubra_theme";

/// Tunables for the assistant. Every field has a default matching the demo,
/// so a host can override just the parts it cares about:
///
/// ```
/// use trading_assistant_core::models::config::AssistantConfig;
///
/// let config = AssistantConfig::from_json(r#"{ "max_notifications": 3 }"#).unwrap();
/// assert_eq!(config.max_notifications, 3);
/// assert_eq!(config.watchlist_capacity, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Maximum number of watchlist symbols; the oldest is evicted past this.
    pub watchlist_capacity: usize,

    /// How long a notification stays visible.
    pub notification_timeout_ms: u64,

    /// Upper bound on simultaneously visible notifications.
    pub max_notifications: usize,

    /// Period of the chart last-point perturbation.
    pub chart_tick_ms: u64,

    /// Period of the position PnL perturbation.
    pub pnl_tick_ms: u64,

    /// Delay between a quick trade and its "Order Executed" follow-up.
    pub order_fill_delay_ms: u64,

    /// Number of points in a freshly seeded chart series.
    pub chart_points: usize,

    /// Starting price of the seeded walk.
    pub base_price: f64,

    /// Lower clamp for chart prices.
    pub price_floor: f64,

    /// Upper clamp for chart prices.
    pub price_ceiling: f64,

    /// Step size used while seeding the series.
    pub seed_volatility: f64,

    /// Step size of the 1-second chart tick.
    pub tick_volatility: f64,

    /// Step size of the position PnL tick (unbounded walk).
    pub pnl_volatility: f64,

    pub watchlist_key: String,
    pub theme_key: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            watchlist_capacity: 20,
            notification_timeout_ms: 5_000,
            max_notifications: 10,
            chart_tick_ms: 1_000,
            pnl_tick_ms: 5_000,
            order_fill_delay_ms: 2_000,
            chart_points: 50,
            base_price: 45.50,
            price_floor: 30.0,
            price_ceiling: 60.0,
            seed_volatility: 2.0,
            tick_volatility: 1.0,
            pnl_volatility: 100.0,
            watchlist_key: WATCHLIST_KEY.to_string(),
            theme_key: THEME_KEY.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would break the state invariants.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.watchlist_capacity == 0 {
            return Err(CoreError::Config("watchlist_capacity must be at least 1".into()));
        }
        if self.max_notifications == 0 {
            return Err(CoreError::Config("max_notifications must be at least 1".into()));
        }
        if self.chart_points == 0 {
            return Err(CoreError::Config("chart_points must be at least 1".into()));
        }
        for (name, period) in [
            ("notification_timeout_ms", self.notification_timeout_ms),
            ("chart_tick_ms", self.chart_tick_ms),
            ("pnl_tick_ms", self.pnl_tick_ms),
            ("order_fill_delay_ms", self.order_fill_delay_ms),
        ] {
            if period == 0 {
                return Err(CoreError::Config(format!("{name} must be greater than zero")));
            }
        }
        if !(self.price_floor < self.price_ceiling) {
            return Err(CoreError::Config(format!(
                "price_floor ({}) must be below price_ceiling ({})",
                self.price_floor, self.price_ceiling
            )));
        }
        if !(self.price_floor..=self.price_ceiling).contains(&self.base_price) {
            return Err(CoreError::Config(format!(
                "base_price {} lies outside [{}, {}]",
                self.base_price, self.price_floor, self.price_ceiling
            )));
        }
        for (name, vol) in [
            ("seed_volatility", self.seed_volatility),
            ("tick_volatility", self.tick_volatility),
            ("pnl_volatility", self.pnl_volatility),
        ] {
            if !vol.is_finite() || vol < 0.0 {
                return Err(CoreError::Config(format!("{name} must be a non-negative number")));
            }
        }
        if self.watchlist_key.is_empty() || self.theme_key.is_empty() {
            return Err(CoreError::Config("storage keys must not be empty".into()));
        }
        if self.watchlist_key == self.theme_key {
            return Err(CoreError::Config("watchlist_key and theme_key must differ".into()));
        }
        Ok(())
    }
}
