//! Progress observers.
//!
//! The pipeline reports job events through [`JobUi`]; how (and whether)
//! they are rendered is up to the implementation. Every renderer keeps its
//! bookkeeping in a [`JobTracker`], which also backs [`JobUi::wait`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;

mod oneline;
mod quiet;
mod simple;
mod tracker;

pub use oneline::UiOneLine;
pub use quiet::UiQuiet;
pub use simple::UiSimple;
pub use tracker::{JobState, JobTracker};

/// Observer for job lifecycle events. Called concurrently from every
/// running acquisition.
pub trait JobUi: Send + Sync {
    /// Begin rendering.
    fn start(&self);

    /// Release rendering resources. Called after [`wait`](Self::wait).
    fn stop(&self);

    /// Redraw now.
    fn refresh(&self);

    /// Mark `job` as running.
    fn add_job(&self, job: &str);

    /// Progress message for `job`.
    fn print(&self, job: &str, msg: &str);

    /// Mark `job` as done, successful or not.
    fn job_done(&self, job: &str);

    /// Block until every added job is done.
    fn wait(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiKind {
    #[default]
    OneLine,
    Simple,
    Quiet,
}

impl UiKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::OneLine => "oneline",
            Self::Simple => "simple",
            Self::Quiet => "quiet",
        }
    }
}

impl FromStr for UiKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oneline" => Ok(Self::OneLine),
            "simple" => Ok(Self::Simple),
            "quiet" => Ok(Self::Quiet),
            other => Err(Error::UnknownUi(other.to_string())),
        }
    }
}

impl fmt::Display for UiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

pub fn new_ui(kind: UiKind) -> Arc<dyn JobUi> {
    match kind {
        UiKind::OneLine => Arc::new(UiOneLine::new("vopher")),
        UiKind::Simple => Arc::new(UiSimple::new()),
        UiKind::Quiet => Arc::new(UiQuiet::default()),
    }
}
