//! Dynamic agents: interval snapshots and marker classification

pub mod category;
pub mod snapshot;

pub use category::{AgentCategory, Allegiance, Profession};
pub use snapshot::{AgentFlags, EntitySnapshot, EntitySnapshotCache, SnapshotError, DEFAULT_REFRESH_INTERVAL};
