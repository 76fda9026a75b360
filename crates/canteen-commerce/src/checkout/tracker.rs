//! Timer-driven order progress.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use canteen_executor::{Scheduler, Task, TimerHandle};

use crate::checkout::{OrderStage, OrderTrackingState};
use crate::observe::{Observers, SubscriptionId};

/// Default delays between stages, in milliseconds.
pub const DEFAULT_DELAYS_MS: [u64; 4] = [3000, 5000, 7000, 6000];

/// How long each stage lasts before the next one.
///
/// The k-th delay precedes the move into stage k+1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerSchedule {
    delays: [Duration; 4],
}

impl TrackerSchedule {
    /// Create a schedule from per-stage delays.
    pub fn new(delays: [Duration; 4]) -> Self {
        Self { delays }
    }

    /// Create a schedule from millisecond delays.
    pub fn from_millis(delays_ms: [u64; 4]) -> Self {
        Self::new(delays_ms.map(Duration::from_millis))
    }

    /// Time spent in `stage` before advancing. `None` for the terminal stage.
    pub fn delay_after(&self, stage: OrderStage) -> Option<Duration> {
        if stage.is_terminal() {
            return None;
        }
        self.delays.get(usize::from(stage.rank()) - 1).copied()
    }

    /// Time from the first stage to the last.
    pub fn total(&self) -> Duration {
        self.delays.iter().sum()
    }
}

impl Default for TrackerSchedule {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DELAYS_MS)
    }
}

struct TrackerShared<H> {
    state: OrderTrackingState,
    pending: Option<H>,
    disposed: bool,
    listeners: Observers<OrderTrackingState>,
}

type Shared<S> = Arc<Mutex<TrackerShared<<S as Scheduler>::Handle>>>;

/// Advances an order through its stages on a timer.
///
/// Each stage change is published to subscribers. Listeners run while the
/// tracker is locked and must not call back into it.
///
/// Dropping the tracker disposes it: the pending timer is cancelled, and a
/// timer that already fired sees the disposal before it can advance.
pub struct OrderTracker<S: Scheduler> {
    shared: Shared<S>,
}

impl<S: Scheduler> OrderTracker<S> {
    /// Start tracking `state`, scheduling the first transition.
    pub fn start(state: OrderTrackingState, scheduler: S, schedule: TrackerSchedule) -> Self {
        tracing::info!(order_id = %state.order_id(), stage = %state.stage(), "Tracking order");
        let shared: Shared<S> = Arc::new(Mutex::new(TrackerShared {
            state,
            pending: None,
            disposed: false,
            listeners: Observers::new(),
        }));
        {
            let mut guard = lock(&shared);
            arm(&shared, &mut guard, &scheduler, schedule);
        }
        Self { shared }
    }

    /// Current stage.
    pub fn current_stage(&self) -> OrderStage {
        lock(&self.shared).state.stage()
    }

    /// Copy of the current tracking state.
    pub fn snapshot(&self) -> OrderTrackingState {
        lock(&self.shared).state.clone()
    }

    /// Check if the order reached its final stage.
    pub fn is_complete(&self) -> bool {
        lock(&self.shared).state.is_terminal()
    }

    /// Check if the tracker was disposed.
    pub fn is_disposed(&self) -> bool {
        lock(&self.shared).disposed
    }

    /// Register a listener called with the state after each stage change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&OrderTrackingState) + Send + Sync + 'static,
    {
        lock(&self.shared).listeners.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.shared).listeners.unsubscribe(id)
    }

    /// Stop tracking. The stage stays where it is. Idempotent.
    pub fn dispose(&self) {
        let mut guard = lock(&self.shared);
        if guard.disposed {
            return;
        }
        guard.disposed = true;
        if let Some(handle) = guard.pending.take() {
            handle.cancel();
        }
        guard.listeners.clear();
        tracing::debug!(order_id = %guard.state.order_id(), stage = %guard.state.stage(), "Order tracker disposed");
    }
}

impl<S: Scheduler> Drop for OrderTracker<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<S: Scheduler> std::fmt::Debug for OrderTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = lock(&self.shared);
        f.debug_struct("OrderTracker")
            .field("state", &guard.state)
            .field("pending", &guard.pending.is_some())
            .field("disposed", &guard.disposed)
            .finish()
    }
}

fn lock<H>(shared: &Mutex<TrackerShared<H>>) -> MutexGuard<'_, TrackerShared<H>> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Schedule the next transition, if any. Called with the tracker locked.
fn arm<S: Scheduler>(
    shared: &Shared<S>,
    guard: &mut TrackerShared<S::Handle>,
    scheduler: &S,
    schedule: TrackerSchedule,
) {
    let Some(delay) = schedule.delay_after(guard.state.stage()) else {
        return;
    };
    let weak = Arc::downgrade(shared);
    let next_scheduler = scheduler.clone();
    let task: Task = Box::new(move || fire(weak, next_scheduler, schedule));
    guard.pending = Some(scheduler.schedule(delay, task));
}

fn fire<S: Scheduler>(
    weak: Weak<Mutex<TrackerShared<S::Handle>>>,
    scheduler: S,
    schedule: TrackerSchedule,
) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let mut guard = lock(&shared);
    if guard.disposed {
        return;
    }
    guard.pending = None;
    let Some(stage) = guard.state.advance() else {
        return;
    };
    tracing::info!(order_id = %guard.state.order_id(), stage = stage.as_str(), "Order stage advanced");
    guard.listeners.publish(&guard.state);
    arm(&shared, &mut guard, &scheduler, schedule);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::OrderId;
    use crate::money::Money;
    use canteen_executor::{ManualScheduler, ManualTimerHandle};

    fn state() -> OrderTrackingState {
        OrderTrackingState::new(OrderId::new("123456"), Money::from_rupees(120))
    }

    fn record(tracker: &OrderTracker<impl Scheduler>) -> Arc<Mutex<Vec<u8>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        tracker.subscribe(move |st| s.lock().unwrap().push(st.stage().rank()));
        seen
    }

    #[test]
    fn test_schedule_delays() {
        let schedule = TrackerSchedule::default();
        assert_eq!(
            schedule.delay_after(OrderStage::Confirmed),
            Some(Duration::from_millis(3000))
        );
        assert_eq!(
            schedule.delay_after(OrderStage::ReadyForPickup),
            Some(Duration::from_millis(6000))
        );
        assert_eq!(schedule.delay_after(OrderStage::Completed), None);
        assert_eq!(schedule.total(), Duration::from_millis(21_000));
    }

    #[test]
    fn test_runs_to_completion_in_order() {
        let clock = ManualScheduler::new();
        let tracker = OrderTracker::start(state(), clock.clone(), TrackerSchedule::default());
        let seen = record(&tracker);

        clock.advance(Duration::from_millis(2999));
        assert_eq!(tracker.current_stage(), OrderStage::Confirmed);
        clock.advance(Duration::from_millis(1));
        assert_eq!(tracker.current_stage(), OrderStage::Accepted);
        clock.advance(Duration::from_millis(5000));
        assert_eq!(tracker.current_stage(), OrderStage::Preparing);

        clock.run_until_idle();
        assert!(tracker.is_complete());
        assert_eq!(clock.now(), Duration::from_millis(21_000));
        assert_eq!(clock.pending(), 0);
        assert_eq!(*seen.lock().unwrap(), vec![2, 3, 4, 5]);

        clock.advance(Duration::from_secs(60));
        assert_eq!(tracker.current_stage(), OrderStage::Completed);
        assert_eq!(tracker.snapshot().total(), Money::from_rupees(120));
    }

    #[test]
    fn test_dispose_freezes_stage() {
        let clock = ManualScheduler::new();
        let tracker = OrderTracker::start(state(), clock.clone(), TrackerSchedule::default());
        let seen = record(&tracker);

        clock.advance(Duration::from_millis(3000));
        assert_eq!(tracker.current_stage(), OrderStage::Accepted);

        tracker.dispose();
        tracker.dispose();
        assert!(tracker.is_disposed());
        assert_eq!(clock.pending(), 0);

        clock.advance(Duration::from_secs(60));
        assert_eq!(tracker.current_stage(), OrderStage::Accepted);
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let clock = ManualScheduler::new();
        let tracker = OrderTracker::start(state(), clock.clone(), TrackerSchedule::default());
        assert_eq!(clock.pending(), 1);
        drop(tracker);
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.run_until_idle(), 0);
    }

    /// Scheduler whose handles cannot cancel, so a timer always fires.
    #[derive(Clone, Default)]
    struct UncancellableScheduler {
        inner: ManualScheduler,
    }

    struct IgnoredHandle(#[allow(dead_code)] ManualTimerHandle);

    impl TimerHandle for IgnoredHandle {
        fn cancel(&self) {}
    }

    impl Scheduler for UncancellableScheduler {
        type Handle = IgnoredHandle;

        fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
            IgnoredHandle(self.inner.schedule(delay, task))
        }
    }

    #[test]
    fn test_timer_firing_after_dispose_is_ignored() {
        let clock = UncancellableScheduler::default();
        let tracker = OrderTracker::start(state(), clock.clone(), TrackerSchedule::default());
        tracker.dispose();

        assert_eq!(clock.inner.advance(Duration::from_millis(3000)), 1);
        assert_eq!(tracker.current_stage(), OrderStage::Confirmed);
        assert_eq!(clock.inner.pending(), 0);
    }

    #[test]
    fn test_terminal_state_schedules_nothing() {
        let clock = ManualScheduler::new();
        let mut done = state();
        while done.advance().is_some() {}
        let tracker = OrderTracker::start(done, clock.clone(), TrackerSchedule::default());
        assert!(tracker.is_complete());
        assert_eq!(clock.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_drives_tracker() {
        let scheduler = canteen_executor::TokioScheduler::current().unwrap();
        let tracker = OrderTracker::start(state(), scheduler, TrackerSchedule::default());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(tracker.current_stage(), OrderStage::Accepted);

        tokio::time::sleep(Duration::from_millis(18_000)).await;
        assert_eq!(tracker.current_stage(), OrderStage::Completed);
    }
}
