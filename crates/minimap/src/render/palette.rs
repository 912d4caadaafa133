//! Marker colors, sizes and range rings

use crate::agents::{AgentCategory, Profession};
use crate::foundation::math::Vec4;

/// RGBA color with components in `[0, 1]`
pub type Color = Vec4;

/// Build a color from 8-bit channels
pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}

/// Marker radius for ordinary agents, in pixels
pub const AGENT_RADIUS: f32 = 2.2;
/// Marker radius for bosses, in pixels
pub const BOSS_RADIUS: f32 = 3.5;
/// Circle segments for spirits and minions
pub const LOW_PRIORITY_SEGMENTS: u32 = 8;
/// Circle segments for every other agent
pub const AGENT_SEGMENTS: u32 = 12;
/// Player marker radius, in pixels
pub const PLAYER_RADIUS: f32 = 2.2;
/// Player marker segments
pub const PLAYER_SEGMENTS: u32 = 16;
/// Range ring segments
pub const RING_SEGMENTS: u32 = 64;
/// Range ring line thickness, in pixels
pub const RING_THICKNESS: f32 = 1.5;

/// Fill color for pathing quads
pub fn plane_color(is_primary: bool) -> Color {
    if is_primary {
        rgba(160, 160, 160, 220)
    } else {
        rgba(127, 191, 255, 220)
    }
}

/// Border color of a profession
pub fn profession_color(profession: Profession) -> Color {
    match profession {
        Profession::Warrior => rgba(234, 163, 0, 255),
        Profession::Ranger => rgba(85, 160, 0, 255),
        Profession::Monk => rgba(68, 68, 187, 255),
        Profession::Necromancer => rgba(0, 170, 85, 255),
        Profession::Mesmer => rgba(128, 0, 170, 255),
        Profession::Elementalist => rgba(187, 51, 51, 255),
        Profession::Assassin => rgba(170, 0, 136, 255),
        Profession::Ritualist => rgba(0, 170, 170, 255),
        Profession::Paragon => rgba(153, 96, 0, 255),
        Profession::Dervish => rgba(119, 119, 204, 255),
        Profession::None => rgba(102, 102, 102, 255),
    }
}

/// Marker fill for an agent
pub fn agent_color(category: AgentCategory, alive: bool) -> Color {
    let enemy_dead = rgba(50, 0, 0, 255);
    let ally = rgba(153, 255, 153, 255);
    let ally_dead = rgba(0, 128, 128, 100);

    match category {
        AgentCategory::Boss { profession, .. } if alive => profession_color(profession),
        AgentCategory::Boss { .. } => enemy_dead,
        AgentCategory::Enemy if alive => rgba(255, 0, 0, 255),
        AgentCategory::Enemy => enemy_dead,
        AgentCategory::Ally | AgentCategory::NpcMinipet if alive => ally,
        AgentCategory::Ally | AgentCategory::NpcMinipet => ally_dead,
        AgentCategory::SpiritPet => rgba(0, 128, 96, 255),
        AgentCategory::Minion => rgba(0, 100, 0, 255),
        AgentCategory::Neutral => rgba(0, 0, 220, 255),
    }
}

/// Marker radius for an agent
pub fn agent_radius(category: AgentCategory) -> f32 {
    if category.is_boss() { BOSS_RADIUS } else { AGENT_RADIUS }
}

/// Circle segments for an agent
pub fn agent_segments(category: AgentCategory) -> u32 {
    if category.is_low_priority() { LOW_PRIORITY_SEGMENTS } else { AGENT_SEGMENTS }
}

/// Player marker fill
pub fn player_color(alive: bool) -> Color {
    if alive {
        rgba(255, 128, 0, 255)
    } else {
        rgba(255, 128, 0, 100)
    }
}

/// Fixed gameplay ranges drawn around the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRing {
    /// Aggro range
    Earshot,
    /// Spell casting range
    Spellcast,
    /// Spirit range
    Spirit,
    /// Compass range
    Compass,
}

impl RangeRing {
    /// Rings in draw order
    pub const ALL: [Self; 4] = [Self::Earshot, Self::Spellcast, Self::Spirit, Self::Compass];

    /// Radius in world units
    pub fn radius(self) -> f32 {
        match self {
            Self::Earshot => 1012.0,
            Self::Spellcast => 1248.0,
            Self::Spirit => 2500.0,
            Self::Compass => 5000.0,
        }
    }

    /// Outline color
    pub fn color(self) -> Color {
        match self {
            Self::Earshot => rgba(153, 68, 68, 255),
            Self::Spellcast => rgba(17, 119, 119, 255),
            Self::Spirit => rgba(51, 119, 51, 255),
            Self::Compass => rgba(102, 102, 17, 255),
        }
    }
}
