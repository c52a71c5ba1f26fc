// Read-only view of the session for the presentation layer

use std::fmt;

use glam::Vec2;

use crate::game::characters::{EquipmentSlot, Gender, MotionState, Stat};
use crate::game::skills::SkillUse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    pub stat: Stat,
    pub base: i32,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillLine {
    pub name: String,
    pub unlock_level: u32,
    pub base_power: i32,
    pub skill_multiplier: f32,
    pub int_multiplier: f32,
    pub cooldown: f32,
    pub cooldown_timer: f32,
}

/// Everything the HUD draws, copied out of the session at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub name: String,
    pub gender: Gender,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next_level: u32,
    pub stat_points: u32,
    pub stats: Vec<StatLine>,
    pub max_hp: i32,
    pub current_hp: i32,
    pub equipped: Vec<(EquipmentSlot, Option<String>)>,
    /// Unlocked skills only, in hotkey order
    pub skills: Vec<SkillLine>,
    pub last_skill: Option<SkillUse>,
    pub position: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
    pub motion: MotionState,
}

impl HudSnapshot {
    pub fn stat(&self, stat: Stat) -> Option<&StatLine> {
        self.stats.iter().find(|line| line.stat == stat)
    }

    pub fn equipped_name(&self, slot: EquipmentSlot) -> Option<&str> {
        self.equipped
            .iter()
            .find(|(s, _)| *s == slot)
            .and_then(|(_, name)| name.as_deref())
    }
}

impl fmt::Display for HudSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) Lv{}", self.name, self.gender, self.level)?;
        writeln!(
            f,
            "XP {}/{}  Points {}  HP {}/{}",
            self.experience,
            self.experience_to_next_level,
            self.stat_points,
            self.current_hp,
            self.max_hp
        )?;

        for line in &self.stats {
            write!(f, "{} {} ({})  ", line.stat, line.base, line.total)?;
        }
        writeln!(f)?;

        for (slot, name) in &self.equipped {
            write!(f, "{}: {}  ", slot, name.as_deref().unwrap_or("-"))?;
        }
        writeln!(f)?;

        for skill in &self.skills {
            write!(
                f,
                "{} (Lv{}) Pow:{} Mult:{} INTx:{} CD:{}s",
                skill.name,
                skill.unlock_level,
                skill.base_power,
                skill.skill_multiplier,
                skill.int_multiplier,
                skill.cooldown
            )?;
            if skill.cooldown_timer > 0.0 {
                write!(f, " [{:.1}s]", skill.cooldown_timer)?;
            }
            writeln!(f)?;
        }

        if let Some(used) = &self.last_skill {
            writeln!(f, "Last skill: {} | Damage: {}", used.name, used.damage)?;
        }

        write!(
            f,
            "Pos ({:.0}, {:.0}) Vel ({:.0}, {:.0}) {}",
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
            self.motion.pose_name()
        )
    }
}
