//! Agent classification for marker styling

use serde::{Deserialize, Serialize};

/// Relationship of an agent to the player, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Allegiance {
    /// Unrecognized host value
    #[default]
    Unknown,
    /// Friendly player or NPC
    Ally,
    /// Neither friend nor foe
    Neutral,
    /// Hostile
    Enemy,
    /// Spirit or pet
    SpiritPet,
    /// Minion
    Minion,
    /// NPC or minipet
    NpcMinipet,
}

impl Allegiance {
    /// Decode the host's numeric allegiance
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Ally,
            2 => Self::Neutral,
            3 => Self::Enemy,
            4 => Self::SpiritPet,
            5 => Self::Minion,
            6 => Self::NpcMinipet,
            _ => Self::Unknown,
        }
    }
}

/// Primary profession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Profession {
    /// No profession
    #[default]
    None,
    /// Warrior
    Warrior,
    /// Ranger
    Ranger,
    /// Monk
    Monk,
    /// Necromancer
    Necromancer,
    /// Mesmer
    Mesmer,
    /// Elementalist
    Elementalist,
    /// Assassin
    Assassin,
    /// Ritualist
    Ritualist,
    /// Paragon
    Paragon,
    /// Dervish
    Dervish,
}

impl Profession {
    /// Decode the host's numeric profession id
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Self::Warrior,
            2 => Self::Ranger,
            3 => Self::Monk,
            4 => Self::Necromancer,
            5 => Self::Mesmer,
            6 => Self::Elementalist,
            7 => Self::Assassin,
            8 => Self::Ritualist,
            9 => Self::Paragon,
            10 => Self::Dervish,
            _ => Self::None,
        }
    }
}

/// Marker category, derived every frame from live lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentCategory {
    /// Boss-glowing agent, colored by profession
    Boss {
        /// Primary profession
        profession: Profession,
        /// Boss is also a spirit or minion
        low_priority: bool,
    },
    /// Hostile
    Enemy,
    /// Allied player or NPC
    Ally,
    /// Spirit or pet
    SpiritPet,
    /// Minion
    Minion,
    /// NPC or minipet
    NpcMinipet,
    /// Anything else
    Neutral,
}

impl AgentCategory {
    /// Boss glow wins over allegiance
    pub fn classify(is_boss: bool, allegiance: Allegiance, profession: Profession) -> Self {
        if is_boss {
            return Self::Boss {
                profession,
                low_priority: matches!(allegiance, Allegiance::SpiritPet | Allegiance::Minion),
            };
        }

        match allegiance {
            Allegiance::Enemy => Self::Enemy,
            Allegiance::Ally => Self::Ally,
            Allegiance::SpiritPet => Self::SpiritPet,
            Allegiance::Minion => Self::Minion,
            Allegiance::NpcMinipet => Self::NpcMinipet,
            Allegiance::Neutral | Allegiance::Unknown => Self::Neutral,
        }
    }

    /// Spirits and minions get coarser markers, boss glow or not
    pub fn is_low_priority(self) -> bool {
        match self {
            Self::Boss { low_priority, .. } => low_priority,
            Self::SpiritPet | Self::Minion => true,
            _ => false,
        }
    }

    /// Whether this is a boss
    pub fn is_boss(self) -> bool {
        matches!(self, Self::Boss { .. })
    }
}
