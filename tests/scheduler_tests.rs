//! Lifecycle tests for the recurring daily trigger.

use chrono::{Duration as ChronoDuration, Local, NaiveTime};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use timebank::core::scheduler::Scheduler;

#[test]
fn stop_is_prompt_and_job_never_fires_early() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();

    // Fire time ~12 hours away: the job must not run in this test.
    let far = (Local::now() + ChronoDuration::hours(12)).time();
    let handle = Scheduler::start(far, move |_day| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    thread::sleep(Duration::from_millis(200));

    let started = Instant::now();
    handle.stop();
    assert!(started.elapsed() < Duration::from_secs(5), "stop() hung");
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn job_fires_at_the_scheduled_time_with_yesterday() {
    let now = Local::now().naive_local();

    // A 2-second horizon that crosses midnight would schedule for tomorrow;
    // skip the firing assertion in that (once-a-day) window.
    if now.time() > NaiveTime::from_hms_opt(23, 59, 50).unwrap() {
        return;
    }

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    let expected_day = now.date() - chrono::Days::new(1);

    let fire_at = (now + ChronoDuration::seconds(2)).time();
    let handle = Scheduler::start(fire_at, move |day| {
        assert_eq!(day, expected_day);
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // Poll generously; timers on loaded CI machines drift.
    let deadline = Instant::now() + Duration::from_secs(15);
    while fired.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(100));
    }

    handle.stop();
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
