use console::{Term, style};

use super::{JobTracker, JobUi};

/// One line per event, with the run time of finished jobs.
pub struct UiSimple {
    term:    Term,
    tracker: JobTracker,
}

impl UiSimple {
    pub fn new() -> Self { Self::with_term(Term::stderr()) }

    pub fn with_term(term: Term) -> Self {
        Self {
            term,
            tracker: JobTracker::new(),
        }
    }

    fn line(&self, line: &str) {
        // Rendering is best effort; a closed terminal must not fail a job.
        let _ = self.term.write_line(line);
    }
}

impl Default for UiSimple {
    fn default() -> Self { Self::new() }
}

impl JobUi for UiSimple {
    fn start(&self) {}

    fn stop(&self) {
        let (done, total) = self.tracker.progress();
        self.line(&format!("{done} of {total} plugins processed"));
        self.tracker.clear();
    }

    fn refresh(&self) { let _ = self.term.flush(); }

    fn add_job(&self, job: &str) {
        if self.tracker.add(job) {
            self.line(&format!("{} {}", style("start").cyan(), job));
        }
    }

    fn print(&self, job: &str, msg: &str) { self.line(&format!("{} {msg}", style(job).dim())); }

    fn job_done(&self, job: &str) {
        if let Some(elapsed) = self.tracker.done(job) {
            self.line(&format!("{} {} ({elapsed:.2?})", style("done").green(), job));
        }
    }

    fn wait(&self) { self.tracker.wait(); }
}
