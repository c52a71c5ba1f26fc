// Character system
//
// This module contains everything related to the playable hero:
// - Base stats and the stat-point economy
// - Equipment slots and derived totals
// - Experience curve and level-ups
// - The on-map entity and its movement state

pub mod allocation;
pub mod character;
pub mod entity;
pub mod equipment;
pub mod progression;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use allocation::StatAllocationDraft;
pub use character::{Gender, Player, DEFAULT_PLAYER_NAME};
pub use entity::PlayerEntity;
pub use equipment::{Equipment, EquipmentSlot, Loadout, StatBonus};
pub use progression::{experience_to_next_level, Progression, MAX_LEVEL};
pub use state::{MotionState, MotionStateMachine};
pub use stats::{Stat, StatBlock, StatParseError, MAX_STAT_VALUE};
