//! Recurring daily trigger with an explicit start/stop lifecycle.
//!
//! The scheduler owns a single worker thread that sleeps until the next
//! local wall-clock occurrence of `fire_at`, runs the job for yesterday, and
//! goes back to sleep. The job executes on the worker thread and the next
//! fire instant is computed only after it returns, so firings never overlap:
//! an overrunning batch delays the next tick instead of racing it.

use crate::utils::date::yesterday;
use chrono::{Local, NaiveDate, NaiveTime};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Scheduler;

/// Handle to a started scheduler. Dropping it without calling `stop` leaves
/// the worker running for the life of the process.
pub struct SchedulerHandle {
    stop_tx: Sender<()>,
    join: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Spawn the worker. `job` receives the day to close (local yesterday at
    /// the moment the trigger fires).
    pub fn start<F>(fire_at: NaiveTime, mut job: F) -> SchedulerHandle
    where
        F: FnMut(NaiveDate) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let join = thread::spawn(move || {
            loop {
                let wait = until_next(fire_at);

                match stop_rx.recv_timeout(wait) {
                    // Stop requested, or the handle is gone.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => job(yesterday()),
                }
            }
        });

        SchedulerHandle {
            stop_tx,
            join: Some(join),
        }
    }
}

impl SchedulerHandle {
    /// Signal the worker and wait for it to exit. Idempotent by construction:
    /// consumes the handle.
    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }

    /// Block the calling thread for as long as the worker runs (a daemon
    /// foreground mode; the process is torn down by SIGINT).
    pub fn wait(mut self) {
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Duration until the next local occurrence of `fire_at` (today if still
/// ahead, otherwise tomorrow).
fn until_next(fire_at: NaiveTime) -> Duration {
    let now = Local::now().naive_local();

    let today_fire = now.date().and_time(fire_at);
    let next = if today_fire > now {
        today_fire
    } else {
        (now.date() + chrono::Days::new(1)).and_time(fire_at)
    };

    (next - now).to_std().unwrap_or(Duration::ZERO)
}
