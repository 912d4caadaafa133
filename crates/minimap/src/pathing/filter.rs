//! Per-map rejection of known-corrupt trapezoids
//!
//! Some maps ship pathing data with stray primitives far outside the playable
//! area. Each affected map gets a table entry; the general pipeline never
//! branches on map identifiers.

use super::Trapezoid;
use crate::host::MapId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map identifiers with built-in filter entries
pub mod known_maps {
    use crate::host::MapId;

    /// Foible's Fair
    pub const FOIBLES_FAIR: MapId = 116;
    /// Ice Tooth Cave
    pub const ICE_TOOTH_CAVE: MapId = 147;
    /// Vizunah Square (Foreign Quarter)
    pub const VIZUNAH_SQUARE_FOREIGN: MapId = 221;
}

/// A single rejection predicate over one trapezoid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum TrapezoidRule {
    /// Reject if either horizontal edge lies above `threshold`
    YAbove {
        /// Highest accepted Y
        threshold: f32,
    },
    /// Reject if the bottom edge lies below `threshold`
    BottomBelow {
        /// Lowest accepted bottom Y
        threshold: f32,
    },
    /// Reject primitives on planes above `plane`
    PlaneAbove {
        /// Highest accepted plane index
        plane: u32,
    },
}

impl TrapezoidRule {
    /// Whether this rule discards the trapezoid
    pub fn rejects(&self, trapezoid: &Trapezoid) -> bool {
        match *self {
            Self::YAbove { threshold } => trapezoid.y_top > threshold || trapezoid.y_bottom > threshold,
            Self::BottomBelow { threshold } => trapezoid.y_bottom < threshold,
            Self::PlaneAbove { plane } => trapezoid.plane > plane,
        }
    }
}

/// Configurable filter table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFilterEntry {
    /// Map the rules apply to
    pub map_id: MapId,
    /// Rules, any of which rejects a trapezoid
    pub rules: Vec<TrapezoidRule>,
}

/// Map identifier -> rejection rules
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFilter {
    overrides: HashMap<MapId, Vec<TrapezoidRule>>,
}

impl Default for LayerFilter {
    fn default() -> Self {
        Self::with_known_maps()
    }
}

impl LayerFilter {
    /// Filter that accepts everything on every map
    pub fn empty() -> Self {
        Self { overrides: HashMap::new() }
    }

    /// Filter preloaded with the maps known to carry broken geometry
    pub fn with_known_maps() -> Self {
        let mut filter = Self::empty();
        filter.insert(known_maps::FOIBLES_FAIR, TrapezoidRule::YAbove { threshold: 50_000.0 });
        filter.insert(known_maps::ICE_TOOTH_CAVE, TrapezoidRule::PlaneAbove { plane: 10 });
        filter.insert(known_maps::VIZUNAH_SQUARE_FOREIGN, TrapezoidRule::BottomBelow { threshold: -20_000.0 });
        filter
    }

    /// Add a rule for a map
    pub fn insert(&mut self, map_id: MapId, rule: TrapezoidRule) {
        self.overrides.entry(map_id).or_default().push(rule);
    }

    /// Add configured entries on top of the current table
    pub fn extend<'a>(&mut self, entries: impl IntoIterator<Item = &'a MapFilterEntry>) {
        for entry in entries {
            for rule in &entry.rules {
                self.insert(entry.map_id, *rule);
            }
        }
    }

    /// Rules registered for a map (empty for unlisted maps)
    pub fn rules_for(&self, map_id: MapId) -> &[TrapezoidRule] {
        self.overrides.get(&map_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether a trapezoid may enter the cache for `map_id`
    pub fn accept(&self, map_id: MapId, trapezoid: &Trapezoid) -> bool {
        !self.rules_for(map_id).iter().any(|rule| rule.rejects(trapezoid))
    }
}
