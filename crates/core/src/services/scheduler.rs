use uuid::Uuid;

use crate::models::order::TradeSide;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// What a timer does when it fires. Dispatch happens in the facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerKind {
    /// Perturb the last chart point
    ChartTick,
    /// Perturb every position's PnL
    PnlTick,
    /// Auto-dismiss one notification
    DismissNotification(Uuid),
    /// Follow-up of a simulated quick trade
    OrderFill(TradeSide),
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due_at_ms: u64,
    period_ms: Option<u64>,
    kind: TimerKind,
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub fired_at_ms: u64,
}

/// Virtual-clock timer table.
///
/// Nothing here sleeps: the owner moves time forward and drains due timers
/// with [`Scheduler::pop_due`]. Every handle is tracked, so [`Scheduler::cancel_all`]
/// gives a clean teardown.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Fire once after `delay_ms`.
    pub fn schedule_once(&mut self, delay_ms: u64, kind: TimerKind) -> TimerId {
        self.insert(delay_ms, None, kind)
    }

    /// Fire every `period_ms`, first after one period. A zero period is
    /// treated as 1 ms so draining always terminates.
    pub fn schedule_interval(&mut self, period_ms: u64, kind: TimerKind) -> TimerId {
        let period = period_ms.max(1);
        self.insert(period, Some(period), kind)
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every pending timer. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due_at(&self) -> Option<u64> {
        self.timers.iter().map(|t| t.due_at_ms).min()
    }

    /// Take the earliest timer due at or before `until_ms`, moving the clock
    /// to its due time. Ties fire in scheduling order. Intervals are
    /// re-armed one period later.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<FiredTimer> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_at_ms, t.id))
            .map(|(i, _)| i)?;

        let due_at = self.timers[idx].due_at_ms;
        self.now_ms = self.now_ms.max(due_at);

        let period = self.timers[idx].period_ms;
        let fired = match period {
            Some(period) => {
                let timer = &mut self.timers[idx];
                timer.due_at_ms = due_at.saturating_add(period);
                FiredTimer {
                    id: timer.id,
                    kind: timer.kind.clone(),
                    fired_at_ms: due_at,
                }
            }
            None => {
                let timer = self.timers.remove(idx);
                FiredTimer {
                    id: timer.id,
                    kind: timer.kind,
                    fired_at_ms: due_at,
                }
            }
        };
        Some(fired)
    }

    /// Move the clock forward without firing anything. Never moves backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn insert(&mut self, delay_ms: u64, period_ms: Option<u64>, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
            period_ms,
            kind,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_exactly_once() {
        let mut s = Scheduler::new();
        let id = s.schedule_once(2_000, TimerKind::OrderFill(TradeSide::Buy));
        assert!(s.pop_due(1_999).is_none());
        let fired = s.pop_due(2_000).unwrap();
        assert_eq!(fired.id, id);
        assert_eq!(fired.fired_at_ms, 2_000);
        assert_eq!(s.now_ms(), 2_000);
        assert!(s.pop_due(10_000).is_none());
    }

    #[test]
    fn interval_rearms() {
        let mut s = Scheduler::new();
        s.schedule_interval(1_000, TimerKind::ChartTick);
        let mut fired = 0;
        while s.pop_due(3_500).is_some() {
            fired += 1;
        }
        assert_eq!(fired, 3);
        assert_eq!(s.next_due_at(), Some(4_000));
    }

    #[test]
    fn ties_fire_in_scheduling_order() {
        let mut s = Scheduler::new();
        let a = s.schedule_once(5_000, TimerKind::PnlTick);
        let b = s.schedule_once(5_000, TimerKind::ChartTick);
        assert_eq!(s.pop_due(5_000).unwrap().id, a);
        assert_eq!(s.pop_due(5_000).unwrap().id, b);
    }

    #[test]
    fn cancel_and_cancel_all() {
        let mut s = Scheduler::new();
        let a = s.schedule_once(10, TimerKind::ChartTick);
        s.schedule_interval(10, TimerKind::PnlTick);
        assert!(s.cancel(a));
        assert!(!s.cancel(a));
        assert_eq!(s.pending(), 1);
        assert_eq!(s.cancel_all(), 1);
        assert!(s.pop_due(u64::MAX).is_none());
    }
}
