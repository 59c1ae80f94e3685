use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use once_cell::sync::Lazy;

use super::{JobTracker, JobUi};

const PB_STYLE: &str = "{spinner:.blue} {prefix:.cyan.bold} [{elapsed_precise}] {bar:30.cyan/blue} {pos}/{len} {wide_msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

const TICK_INTERVAL: Duration = Duration::from_millis(25);

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// A single progress line: finished jobs over added jobs, plus the latest
/// message.
pub struct UiOneLine {
    pb:      ProgressBar,
    tracker: JobTracker,
}

impl UiOneLine {
    pub fn new(prefix: &str) -> Self { Self::with_draw_target(prefix, ProgressDrawTarget::stderr()) }

    pub fn with_draw_target(prefix: &str, target: ProgressDrawTarget) -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), target);
        let pb = if let Some(style) = PB_TEMPLATE.as_ref() {
            pb.with_style(style.clone())
        } else {
            pb
        };
        pb.set_prefix(prefix.to_string());

        Self {
            pb,
            tracker: JobTracker::new(),
        }
    }

    pub fn tracker(&self) -> &JobTracker { &self.tracker }
}

impl JobUi for UiOneLine {
    fn start(&self) { self.pb.enable_steady_tick(TICK_INTERVAL); }

    fn stop(&self) {
        let (done, total) = self.tracker.progress();
        self.pb
            .finish_with_message(format!("{done} of {total} plugins processed"));
        self.tracker.clear();
    }

    fn refresh(&self) { self.pb.tick(); }

    fn add_job(&self, job: &str) {
        if self.tracker.add(job) {
            self.pb.inc_length(1);
        }
    }

    fn print(&self, job: &str, msg: &str) { self.pb.set_message(format!("{job}: {msg}")); }

    fn job_done(&self, job: &str) {
        if self.tracker.done(job).is_some() {
            self.pb.inc(1);
            self.pb.set_message(format!("{job}: done"));
        }
    }

    fn wait(&self) { self.tracker.wait(); }
}
