//! Interval-refreshed agent snapshot
//!
//! Querying every agent every frame is the most expensive thing the minimap
//! does, so positions and flags are captured at most once per refresh
//! interval and reused by the frames in between.

use crate::foundation::math::Point2;
use crate::host::{AgentId, HostError, WorldState};
use bitflags::bitflags;
use thiserror::Error;

/// Default snapshot lifetime in seconds
pub const DEFAULT_REFRESH_INTERVAL: f64 = 0.2;

bitflags! {
    /// Per-agent state captured at refresh time
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AgentFlags: u8 {
        /// Agent is alive
        const ALIVE = 1 << 0;
        /// Agent carries the boss glow
        const BOSS = 1 << 1;
    }
}

/// One agent as of the last refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshot {
    /// Host agent id
    pub id: AgentId,
    /// World position
    pub position: Point2,
    /// Alive / boss flags
    pub flags: AgentFlags,
}

impl EntitySnapshot {
    /// Whether the agent was alive
    pub fn is_alive(&self) -> bool {
        self.flags.contains(AgentFlags::ALIVE)
    }

    /// Whether the agent was a boss
    pub fn is_boss(&self) -> bool {
        self.flags.contains(AgentFlags::BOSS)
    }
}

/// Snapshot refresh errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A host query failed mid-refresh; the previous snapshot is still in place
    #[error("agent snapshot query failed: {0}")]
    Query(#[from] HostError),
}

/// Time-windowed cache of every non-player agent
#[derive(Debug, Clone)]
pub struct EntitySnapshotCache {
    interval: f64,
    last_refresh: Option<f64>,
    entries: Vec<EntitySnapshot>,
}

impl Default for EntitySnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

impl EntitySnapshotCache {
    /// Create an empty cache refreshing every `interval` seconds
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_refresh: None,
            entries: Vec::new(),
        }
    }

    /// Refresh interval in seconds
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Change the refresh interval
    pub fn set_interval(&mut self, interval: f64) {
        self.interval = interval;
    }

    /// Whether a refresh would query the host at `now`
    pub fn is_due(&self, now: f64) -> bool {
        self.last_refresh.map_or(true, |last| now - last > self.interval)
    }

    /// Refresh if the interval elapsed
    ///
    /// Returns `Ok(true)` when a new snapshot was taken. The refresh time is
    /// recorded before querying, so a failed refresh is retried at the next
    /// interval rather than on every frame.
    pub fn maybe_refresh<W: WorldState + ?Sized>(&mut self, host: &W, now: f64) -> Result<bool, SnapshotError> {
        if !self.is_due(now) {
            return Ok(false);
        }
        self.last_refresh = Some(now);

        let entries = Self::query(host)?;
        log::trace!("Agent snapshot refreshed: {} agents", entries.len());
        self.entries = entries;

        Ok(true)
    }

    fn query<W: WorldState + ?Sized>(host: &W) -> Result<Vec<EntitySnapshot>, HostError> {
        let player = host.player_agent_id()?;
        let ids = host.agent_ids()?;

        let mut entries = Vec::with_capacity(ids.len());
        for id in ids.into_iter().filter(|&id| id != player) {
            let mut flags = AgentFlags::empty();
            flags.set(AgentFlags::ALIVE, host.agent_alive(id)?);
            flags.set(AgentFlags::BOSS, host.agent_is_boss(id)?);

            entries.push(EntitySnapshot {
                id,
                position: host.agent_position(id)?,
                flags,
            });
        }

        Ok(entries)
    }

    /// Agents as of the last successful refresh
    pub fn entries(&self) -> &[EntitySnapshot] {
        &self.entries
    }

    /// Drop the snapshot and force a refresh on the next call
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_refresh = None;
    }
}
