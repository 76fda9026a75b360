//! One-shot timer scheduling.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled task.
pub trait TimerHandle: Send + 'static {
    /// Cancel the task. A no-op if it already ran.
    fn cancel(&self);
}

/// Runs tasks after a delay.
///
/// Implementations must not run the task inline from `schedule`; callers may
/// hold locks while scheduling.
pub trait Scheduler: Clone + Send + Sync + 'static {
    /// Cancel handle returned for each scheduled task.
    type Handle: TimerHandle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

/// Errors creating a scheduler.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchedulerError {
    #[error("No tokio runtime available on this thread")]
    NoRuntime,
}

/// Scheduler backed by tokio timers.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Create a scheduler bound to the current tokio runtime.
    pub fn current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::with_handle)
            .map_err(|_| SchedulerError::NoRuntime)
    }

    /// Create a scheduler bound to a specific runtime.
    pub fn with_handle(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioTimerHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let join = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        TokioTimerHandle { join }
    }
}

/// Cancel handle for a [`TokioScheduler`] task.
#[derive(Debug)]
pub struct TokioTimerHandle {
    join: JoinHandle<()>,
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(&self) {
        self.join.abort();
    }
}

/// Simulated clock for driving timers deterministically.
///
/// Nothing runs until [`ManualScheduler::advance`] moves the clock. Tasks
/// are fired in due order; ties fire in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    clock: Arc<Mutex<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), Task>,
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualClock")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of tasks waiting to fire.
    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Move the clock forward, firing every task that comes due.
    ///
    /// Tasks scheduled while advancing fire too if they fall inside the
    /// window. Returns the number of tasks fired.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut fired = 0;

        while let Some(task) = self.pop_due(target) {
            // Lock is released here so the task may schedule again.
            task();
            fired += 1;
        }

        let mut clock = self.lock();
        if clock.now < target {
            clock.now = target;
        }
        fired
    }

    /// Fire everything until the queue is empty.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let clock = self.lock();
                clock.queue.keys().next().map(|(due, _)| *due)
            };
            let Some(due) = next else {
                return fired;
            };
            let now = self.now();
            fired += self.advance(due.saturating_sub(now));
        }
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut clock = self.lock();
        let key = *clock.queue.keys().next()?;
        if key.0 > target {
            return None;
        }
        let task = clock.queue.remove(&key)?;
        clock.now = key.0;
        Some(task)
    }

    fn lock(&self) -> MutexGuard<'_, ManualClock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTimerHandle;

    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle {
        let mut clock = self.lock();
        let key = (clock.now + delay, clock.next_seq);
        clock.next_seq += 1;
        clock.queue.insert(key, task);
        ManualTimerHandle {
            key,
            clock: Arc::downgrade(&self.clock),
        }
    }
}

/// Cancel handle for a [`ManualScheduler`] task.
#[derive(Debug)]
pub struct ManualTimerHandle {
    key: (Duration, u64),
    clock: Weak<Mutex<ManualClock>>,
}

impl TimerHandle for ManualTimerHandle {
    fn cancel(&self) {
        if let Some(clock) = self.clock.upgrade() {
            clock
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .queue
                .remove(&self.key);
        }
    }
}
