use std::collections::HashMap;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Lifecycle of one job. A job nobody added yet is pending and has no entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobState {
    Running { since: Instant },
    Done { elapsed: Duration },
}

#[derive(Debug, Default)]
struct Jobs {
    states:  HashMap<String, JobState>,
    running: usize,
}

/// Thread-safe job table shared by the renderers.
#[derive(Debug, Default)]
pub struct JobTracker {
    jobs:    Mutex<Jobs>,
    settled: Condvar,
}

impl JobTracker {
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, Jobs> {
        // A panicking renderer must not wedge every other job.
        self.jobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start `job`. Returns `false` if it was already added.
    pub fn add(&self, job: &str) -> bool {
        let mut jobs = self.lock();
        if jobs.states.contains_key(job) {
            return false;
        }
        jobs.states.insert(job.to_string(), JobState::Running {
            since: Instant::now(),
        });
        jobs.running += 1;
        true
    }

    /// Move `job` to done, returning how long it ran. `None` if it was not
    /// running.
    pub fn done(&self, job: &str) -> Option<Duration> {
        let mut jobs = self.lock();
        let state = jobs.states.get_mut(job)?;
        let JobState::Running { since } = *state else {
            return None;
        };
        let elapsed = since.elapsed();
        *state = JobState::Done { elapsed };
        jobs.running -= 1;
        if jobs.running == 0 {
            self.settled.notify_all();
        }
        Some(elapsed)
    }

    pub fn state(&self, job: &str) -> Option<JobState> { self.lock().states.get(job).copied() }

    /// `(done, total)` over every job that was ever added.
    pub fn progress(&self) -> (usize, usize) {
        let jobs = self.lock();
        let total = jobs.states.len();
        (total - jobs.running, total)
    }

    /// Block until no job is running.
    pub fn wait(&self) {
        let mut jobs = self.lock();
        while jobs.running > 0 {
            jobs = self
                .settled
                .wait(jobs)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
        }
    }

    /// Forget every job.
    pub fn clear(&self) {
        let mut jobs = self.lock();
        jobs.states.clear();
        jobs.running = 0;
        self.settled.notify_all();
    }
}
