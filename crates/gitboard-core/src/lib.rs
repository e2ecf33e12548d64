//! gitboard-core: dual-cadence working tree status dashboard.
//!
//! A fast render tick keeps the terminal block and its spinner alive while
//! a slow, gated refresh cycle re-probes every monitored directory.
//!
//! # Main Entry Points
//!
//! - [`scheduler`] - Drives the render tick and the gated refresh cycle
//! - [`probe`] - Summarises one directory through a status provider
//! - [`render`] - Builds dashboard rows and text
//! - [`config`] - Configuration loading

pub mod cache;
pub mod config;
pub mod errors;
pub mod gate;
pub mod logging;
pub mod model;
pub mod probe;
pub mod render;
pub mod repaint;
pub mod scheduler;
pub mod stats;

pub use cache::SnapshotCache;
pub use config::DashboardConfig;
pub use errors::{ConfigError, DashboardError};
pub use gate::{RefreshGate, RefreshMode, RefreshPermit};
pub use model::{ChangeCounts, DirectoryEntry, EntryState, Health, ProbeFailure, Snapshot};
pub use probe::{Probe, StatusProbe};
pub use render::{RenderCoordinator, RenderOptions};
pub use repaint::{Repaint, TerminalRepaint};
pub use scheduler::{DualCadenceScheduler, SchedulerState};
pub use stats::aggregate;

// Re-export logging initialization
pub use logging::init_logging;
