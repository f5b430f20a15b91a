//! Simulated deferred task scheduler with controllable time progression

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use surface_api::{DeferredTask, DeferredTaskScheduler, ElapsedTask, TaskHandle};

/// One registered task
#[derive(Debug, Clone)]
struct ScheduledEntry {
    handle: TaskHandle,
    due_at: Duration,
    seq: u64,
    task: DeferredTask,
}

#[derive(Debug, Default)]
struct SchedulerInner {
    now: Duration,
    next_seq: u64,
    scheduled: Vec<ScheduledEntry>,
}

/// Simulated task scheduler
///
/// Time only advances when `advance` is called, and elapsed tasks are
/// returned to the caller instead of being executed; the test plays the
/// host event loop and feeds them back into the session.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use session_types::DocumentPath;
/// use sim_surface::SimTaskScheduler;
/// use surface_api::{DeferredTask, DeferredTaskScheduler};
///
/// let mut scheduler = SimTaskScheduler::new();
/// scheduler.schedule_after(
///     Duration::from_millis(1000),
///     DeferredTask::FlushDocument(DocumentPath::new("/a.txt")),
/// );
///
/// assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_millis(1)).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimTaskScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl SimTaskScheduler {
    /// Creates a scheduler at time zero with nothing scheduled
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances simulated time, returning tasks that came due
    ///
    /// Tasks are returned in firing order: earliest due time first,
    /// scheduling order breaking ties.
    pub fn advance(&mut self, delta: Duration) -> Vec<ElapsedTask> {
        let mut inner = self.inner.borrow_mut();
        inner.now += delta;
        let now = inner.now;

        let mut due: Vec<ScheduledEntry> = Vec::new();
        inner.scheduled.retain(|entry| {
            if entry.due_at <= now {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.due_at, entry.seq));

        due.into_iter()
            .map(|entry| ElapsedTask {
                handle: entry.handle,
                task: entry.task,
            })
            .collect()
    }

    /// Number of scheduled-but-not-fired tasks
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().scheduled.len()
    }

    /// Current simulated time
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }
}

impl DeferredTaskScheduler for SimTaskScheduler {
    fn schedule_after(&mut self, delay: Duration, task: DeferredTask) -> TaskHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TaskHandle::new();
        let due_at = inner.now + delay;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.scheduled.push(ScheduledEntry {
            handle,
            due_at,
            seq,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) {
        self.inner
            .borrow_mut()
            .scheduled
            .retain(|entry| entry.handle != handle);
    }
}
