use std::collections::{HashMap, VecDeque};

use rand::Rng;
use uuid::Uuid;

use crate::models::notification::{Notification, Severity};

use super::scheduler::{Scheduler, TimerId, TimerKind};

/// Bounded toast queue with tracked auto-dismiss timers.
///
/// Every pushed notification gets a one-shot dismissal timer. Overflow
/// evicts the oldest entry and cancels its timer, so no orphan timer can
/// outlive the notification it belongs to.
pub struct NotificationService {
    timeout_ms: u64,
    max_len: usize,
    timers: HashMap<Uuid, TimerId>,
}

impl NotificationService {
    pub fn new(timeout_ms: u64, max_len: usize) -> Self {
        Self {
            timeout_ms,
            max_len: max_len.max(1),
            timers: HashMap::new(),
        }
    }

    /// Append a notification and schedule its removal.
    /// Returns the new id plus the ids evicted to respect the bound.
    ///
    /// Ids are drawn from `rng`, so a seeded source gives reproducible ids.
    pub fn push<R: Rng + ?Sized>(
        &mut self,
        queue: &mut VecDeque<Notification>,
        scheduler: &mut Scheduler,
        rng: &mut R,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> (Uuid, Vec<Uuid>) {
        let notification = Notification::new(
            uuid::Builder::from_random_bytes(rng.gen()).into_uuid(),
            title,
            message,
            severity,
            scheduler.now_ms(),
            self.timeout_ms,
        );
        let id = notification.id;
        log::debug!(
            "Notification [{}] {}: {}",
            notification.severity,
            notification.title,
            notification.message
        );

        queue.push_back(notification);
        let timer = scheduler.schedule_once(self.timeout_ms, TimerKind::DismissNotification(id));
        self.timers.insert(id, timer);

        let mut evicted = Vec::new();
        while queue.len() > self.max_len {
            if let Some(oldest) = queue.pop_front() {
                if let Some(timer) = self.timers.remove(&oldest.id) {
                    scheduler.cancel(timer);
                }
                evicted.push(oldest.id);
            }
        }
        (id, evicted)
    }

    /// Remove a notification early and cancel its timer.
    pub fn dismiss(
        &mut self,
        queue: &mut VecDeque<Notification>,
        scheduler: &mut Scheduler,
        id: Uuid,
    ) -> bool {
        if let Some(timer) = self.timers.remove(&id) {
            scheduler.cancel(timer);
        }
        Self::remove_from(queue, id)
    }

    /// Handle a fired dismissal timer.
    pub fn expire(&mut self, queue: &mut VecDeque<Notification>, id: Uuid) -> bool {
        self.timers.remove(&id);
        Self::remove_from(queue, id)
    }

    /// Drop every notification and cancel all dismissal timers.
    pub fn clear(&mut self, queue: &mut VecDeque<Notification>, scheduler: &mut Scheduler) -> Vec<Uuid> {
        for (_, timer) in self.timers.drain() {
            scheduler.cancel(timer);
        }
        queue.drain(..).map(|n| n.id).collect()
    }

    /// Number of dismissal timers still armed.
    #[must_use]
    pub fn tracked_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn remove_from(queue: &mut VecDeque<Notification>, id: Uuid) -> bool {
        match queue.iter().position(|n| n.id == id) {
            Some(idx) => {
                queue.remove(idx);
                true
            }
            None => false,
        }
    }
}
