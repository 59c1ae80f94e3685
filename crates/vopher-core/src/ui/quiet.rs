use super::{JobTracker, JobUi};

/// Renders nothing; only keeps track so `wait` works.
#[derive(Debug, Default)]
pub struct UiQuiet {
    tracker: JobTracker,
}

impl UiQuiet {
    pub fn tracker(&self) -> &JobTracker { &self.tracker }
}

impl JobUi for UiQuiet {
    fn start(&self) {}

    fn stop(&self) { self.tracker.clear(); }

    fn refresh(&self) {}

    fn add_job(&self, job: &str) { self.tracker.add(job); }

    fn print(&self, _job: &str, _msg: &str) {}

    fn job_done(&self, job: &str) { self.tracker.done(job); }

    fn wait(&self) { self.tracker.wait(); }
}
