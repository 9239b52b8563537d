use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::models::chart::{ChartPoint, ChartSeries};
use crate::models::config::AssistantConfig;
use crate::models::position::Position;

use super::random_walk::RandomWalk;

/// Label format for chart points ("14:05").
const LABEL_FORMAT: &str = "%H:%M";

/// Simulated market data: the seeded chart series and the periodic ticks.
///
/// Three independent walks: one seeds the series, one nudges its last
/// point every chart tick, one nudges position PnL every PnL tick.
pub struct SimulationService {
    points: usize,
    base_price: f64,
    seed_walk: RandomWalk,
    tick_walk: RandomWalk,
    pnl_walk: RandomWalk,
}

impl SimulationService {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            points: config.chart_points,
            base_price: config.base_price,
            seed_walk: RandomWalk::bounded(
                config.seed_volatility,
                config.price_floor,
                config.price_ceiling,
            ),
            tick_walk: RandomWalk::bounded(
                config.tick_volatility,
                config.price_floor,
                config.price_ceiling,
            ),
            pnl_walk: RandomWalk::unbounded(config.pnl_volatility),
        }
    }

    /// Generate a fresh series ending one minute before `now`.
    ///
    /// Point `i` is labeled `now - (points - i)` minutes.
    pub fn generate_points<R: Rng + ?Sized>(&self, now: NaiveDateTime, rng: &mut R) -> Vec<ChartPoint> {
        let prices = self.seed_walk.series(self.base_price, self.points, rng);
        prices
            .into_iter()
            .enumerate()
            .map(|(i, price)| {
                let minutes_back = (self.points - i) as i64;
                let at = now - Duration::minutes(minutes_back);
                ChartPoint {
                    label: at.format(LABEL_FORMAT).to_string(),
                    price,
                }
            })
            .collect()
    }

    /// Replace the series, e.g. at startup or on a timeframe switch.
    pub fn reseed<R: Rng + ?Sized>(
        &self,
        chart: &mut ChartSeries,
        timeframe: Option<&str>,
        now: NaiveDateTime,
        rng: &mut R,
    ) {
        if let Some(tf) = timeframe {
            chart.timeframe = tf.to_string();
        }
        chart.points = self.generate_points(now, rng);
    }

    /// Nudge the most recent point. Returns the new price, or `None` on an
    /// empty series.
    pub fn tick_chart<R: Rng + ?Sized>(&self, chart: &mut ChartSeries, rng: &mut R) -> Option<f64> {
        let last = chart.points.last_mut()?;
        last.price = self.tick_walk.next(last.price, rng);
        Some(last.price)
    }

    /// Nudge every position's PnL (signed, unbounded). Returns how many moved.
    pub fn tick_pnl<R: Rng + ?Sized>(&self, positions: &mut [Position], rng: &mut R) -> usize {
        for position in positions.iter_mut() {
            position.pnl = self.pnl_walk.next(position.pnl, rng);
        }
        positions.len()
    }
}
