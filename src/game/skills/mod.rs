// Skill system
//
// - Skill: damage formula and cooldown
// - Roster: random generation of the unlock ladder
// - Book: the player's skills, filtered by level for hotkeys

pub mod book;
pub mod roster;
pub mod skill;

pub use book::{SkillBook, SkillUse};
pub use roster::{generate_roster, RosterConfig};
pub use skill::{CooldownState, Skill};
