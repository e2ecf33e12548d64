//! Dual-cadence refresh scheduler.
//!
//! A fast render tick repaints the dashboard (and advances the spinner in
//! watch mode) while a slow, gated refresh cycle re-probes every directory
//! and publishes a new [`Snapshot`]. The two cadences only meet through
//! [`SnapshotCache`] and [`RefreshGate`].

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::cache::SnapshotCache;
use crate::config::DEFAULT_TICK_MS;
use crate::errors::DashboardError;
use crate::gate::{RefreshGate, RefreshMode, RefreshPermit};
use crate::model::{DirectoryEntry, ProbeFailure, Snapshot};
use crate::probe::Probe;
use crate::render::{RenderCoordinator, Spinner};
use crate::repaint::Repaint;

pub const DEFAULT_TICK: Duration = Duration::from_millis(DEFAULT_TICK_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Ticking,
    Done,
}

pub struct DualCadenceScheduler<P, R> {
    directories: Arc<[PathBuf]>,
    tick: Duration,
    probe: Arc<P>,
    gate: Arc<RefreshGate>,
    cache: Arc<SnapshotCache>,
    renderer: RenderCoordinator,
    spinner: Spinner,
    repaint: R,
    cycles_started: u64,
    state: SchedulerState,
}

impl<P: Probe, R: Repaint> DualCadenceScheduler<P, R> {
    pub fn new(
        directories: Vec<PathBuf>,
        mode: RefreshMode,
        probe: P,
        renderer: RenderCoordinator,
        repaint: R,
    ) -> Self {
        let spinner = Spinner::new(renderer.glyphs().spinner);
        Self {
            directories: directories.into(),
            tick: DEFAULT_TICK,
            probe: Arc::new(probe),
            gate: RefreshGate::new(mode),
            cache: Arc::new(SnapshotCache::new()),
            renderer,
            spinner,
            repaint,
            cycles_started: 0,
            state: SchedulerState::Idle,
        }
    }

    /// Render tick period. Only meaningful in watch mode.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Shared handle to the published snapshots.
    pub fn cache(&self) -> Arc<SnapshotCache> {
        Arc::clone(&self.cache)
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn cycles_started(&self) -> u64 {
        self.cycles_started
    }

    fn mode(&self) -> RefreshMode {
        self.gate.mode()
    }

    /// Run until done: one tick in one-shot mode, forever in watch mode.
    pub async fn run(self) -> Result<Self, DashboardError> {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Run until done or until `shutdown` resolves, then finalize output.
    pub async fn run_until<F>(mut self, shutdown: F) -> Result<Self, DashboardError>
    where
        F: Future<Output = ()>,
    {
        if self.directories.is_empty() {
            return Err(DashboardError::NoDirectories);
        }

        info!(
            event = "core.scheduler.run_started",
            directories = self.directories.len(),
            watch = self.mode().is_watch(),
            tick_ms = self.tick.as_millis() as u64
        );

        self.state = SchedulerState::Ticking;

        let outcome = self.drive(shutdown).await;
        // Restore the cursor even when a repaint failed mid-run.
        let finished = self.repaint.done();
        outcome?;
        finished?;

        info!(
            event = "core.scheduler.run_completed",
            cycles = self.cycles_started
        );
        Ok(self)
    }

    async fn drive<F>(&mut self, shutdown: F) -> Result<(), DashboardError>
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.tick_once().await {
                        warn!(event = "core.scheduler.tick_failed", error = %e);
                        self.state = SchedulerState::Done;
                        return Err(e);
                    }
                    if self.state == SchedulerState::Done {
                        return Ok(());
                    }
                }
                _ = &mut shutdown => {
                    info!(event = "core.scheduler.shutdown_requested");
                    self.state = SchedulerState::Done;
                    return Ok(());
                }
            }
        }
    }

    /// One render tick: gated refresh, then repaint from the cache.
    async fn tick_once(&mut self) -> Result<(), DashboardError> {
        if let Some(cycle) = self.refresh_step() {
            // One-shot mode renders exactly once, so it must wait for data.
            if !self.mode().is_watch()
                && let Err(e) = cycle.await
            {
                warn!(event = "core.scheduler.cycle_join_failed", error = %e);
            }
        }

        let snapshot = self.cache.current();
        let frame = if self.mode().is_watch() {
            Some(self.spinner.next_frame())
        } else {
            None
        };
        let text = self.renderer.render(snapshot.as_deref(), frame);
        self.repaint.write(&text)?;

        if !self.mode().is_watch() {
            self.state = SchedulerState::Done;
        }
        Ok(())
    }

    /// Start a refresh cycle if the gate admits one.
    ///
    /// The cycle runs as its own task so a slow directory never stalls the
    /// render tick; the previous snapshot keeps being shown meanwhile.
    fn refresh_step(&mut self) -> Option<JoinHandle<()>> {
        let permit = self.gate.try_acquire()?;
        self.cycles_started += 1;

        debug!(
            event = "core.scheduler.cycle_started",
            cycle = self.cycles_started
        );

        Some(tokio::spawn(collect_cycle(
            self.cycles_started,
            Arc::clone(&self.directories),
            Arc::clone(&self.probe),
            Arc::clone(&self.cache),
            permit,
        )))
    }
}

/// Probe every directory concurrently and publish the assembled snapshot.
///
/// The permit is released only after publication, so the next cycle can
/// never overtake this one.
async fn collect_cycle<P: Probe>(
    cycle: u64,
    directories: Arc<[PathBuf]>,
    probe: Arc<P>,
    cache: Arc<SnapshotCache>,
    permit: RefreshPermit,
) {
    let handles: Vec<_> = directories
        .iter()
        .cloned()
        .map(|path| {
            let probe = Arc::clone(&probe);
            tokio::spawn(async move { probe.probe(&path).await })
        })
        .collect();

    let entries: Vec<DirectoryEntry> = join_all(handles)
        .await
        .into_iter()
        .zip(directories.iter())
        .map(|(result, path)| match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(
                    event = "core.scheduler.probe_task_failed",
                    path = %path.display(),
                    error = %e
                );
                DirectoryEntry::failed(path.clone(), ProbeFailure::Status)
            }
        })
        .collect();

    let snapshot = Snapshot::new(cycle, entries);
    let totals = snapshot.totals();
    info!(
        event = "core.scheduler.cycle_completed",
        cycle = cycle,
        directories = snapshot.len(),
        dirty = snapshot.dirty_count(),
        failed = snapshot.failed_count(),
        added = totals.added,
        removed = totals.removed,
        edited = totals.edited,
        renamed = totals.renamed
    );

    cache.publish(snapshot);
    drop(permit);
}
