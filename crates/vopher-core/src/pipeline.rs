//! Concurrent acquisition: one task per plugin, fetch then extract.

use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use vopher_archive::FormatRegistry;
use vopher_fetch::{Fetcher, HttpClient};

use crate::error::PipelineError;
use crate::plugin::Plugin;
use crate::resolve::resolve;
use crate::ui::JobUi;

/// What happened to the plugins of one [`Pipeline::update`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Folder already present and not forced.
    pub skipped:   usize,
    pub succeeded: usize,
    pub failed:    usize,
}

impl UpdateReport {
    pub fn is_success(&self) -> bool { self.failed == 0 }
}

/// Fetches and extracts plugins.
///
/// The registry is owned here and shared read-only with every task.
pub struct Pipeline<C: HttpClient> {
    fetcher:  Arc<Fetcher<C>>,
    registry: Arc<FormatRegistry>,
    force:    bool,
}

impl<C: HttpClient + 'static> Pipeline<C> {
    pub fn new(client: C, registry: FormatRegistry) -> Self {
        Self {
            fetcher:  Arc::new(Fetcher::new(client)),
            registry: Arc::new(registry),
            force:    false,
        }
    }

    /// Refetch plugins whose folder already exists.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Acquire every plugin into `<dir>/<name>`.
    ///
    /// Each plugin runs in its own task; a failing plugin is logged, reported
    /// to `ui` as done and counted, and never affects the others. Returns
    /// once `ui` reports all jobs done.
    pub async fn update(&self, plugins: &[Plugin], dir: &Path, ui: Arc<dyn JobUi>) -> UpdateReport {
        let mut report = UpdateReport::default();
        let mut handles = Vec::with_capacity(plugins.len());

        ui.start();

        for plugin in plugins {
            let folder = plugin.folder(dir);

            if !self.force && tokio::fs::metadata(&folder).await.is_ok() {
                tracing::info!(dest = %folder.display(), "already present, skipping");
                report.skipped += 1;
                continue;
            }

            let job = Job {
                id: folder.display().to_string(),
                plugin: plugin.clone(),
                folder,
                fetcher: Arc::clone(&self.fetcher),
                registry: Arc::clone(&self.registry),
                ui: Arc::clone(&ui),
            };
            ui.add_job(&job.id);

            let id = job.id.clone();
            handles.push((id, tokio::spawn(job.run())));
        }

        for (id, handle) in handles {
            match handle.await {
                Ok(true) => report.succeeded += 1,
                Ok(false) => report.failed += 1,
                Err(e) => {
                    // The task died before it could report itself.
                    tracing::error!(dest = %id, error = %e, "acquisition task failed");
                    ui.job_done(&id);
                    report.failed += 1;
                }
            }
        }

        let waiter = Arc::clone(&ui);
        if let Err(e) = tokio::task::spawn_blocking(move || waiter.wait()).await {
            tracing::error!(error = %e, "waiting for the ui failed");
        }
        ui.stop();

        tracing::info!(
            skipped = report.skipped,
            succeeded = report.succeeded,
            failed = report.failed,
            "update finished"
        );
        report
    }
}

struct Job<C: HttpClient> {
    id:       String,
    plugin:   Plugin,
    folder:   PathBuf,
    fetcher:  Arc<Fetcher<C>>,
    registry: Arc<FormatRegistry>,
    ui:       Arc<dyn JobUi>,
}

impl<C: HttpClient> Job<C> {
    /// Acquire, log the outcome, and report the job done either way.
    async fn run(self) -> bool {
        let succeeded = match self.acquire().await {
            Ok(files) => {
                tracing::info!(dest = %self.folder.display(), files, "acquired");
                true
            }
            Err(e) => {
                tracing::error!(dest = %self.folder.display(), error = %e, "acquisition failed");
                self.ui.print(&self.id, &format!("error: {e}"));
                false
            }
        };
        self.ui.job_done(&self.id);
        succeeded
    }

    async fn acquire(&self) -> Result<usize, PipelineError> {
        let resolved = resolve(&self.plugin.url, &self.registry, &self.fetcher).await?;

        self.ui.print(&self.id, &format!("fetching {}", resolved.url));
        let staging = tokio::task::spawn_blocking(tempfile::tempfile).await??;
        let mut staging = tokio::fs::File::from_std(staging);
        self.fetcher
            .fetch(resolved.url.as_str(), self.plugin.checksum.as_ref(), &mut staging)
            .await?;
        let mut staging = staging.into_std().await;

        self.ui.print(&self.id, "extracting");
        let folder = self.folder.clone();
        let strip_dirs = self
            .plugin
            .strip_dirs
            .unwrap_or_else(|| resolved.format.default_strip_dirs());
        let written = tokio::task::spawn_blocking(move || -> vopher_archive::Result<Vec<PathBuf>> {
            staging.rewind()?;
            resolved.format.extract(&folder, &mut staging, strip_dirs)
        })
        .await??;

        Ok(written.len())
    }
}
