// Player character - the logical RPG side of the hero (stats, gear, levels)

use std::fmt;
use std::rc::Rc;

use log::{debug, info};

use super::equipment::{Equipment, EquipmentSlot, Loadout};
use super::progression::Progression;
use super::stats::{Stat, StatBlock};

/// Name used when character creation is confirmed with a blank name
pub const DEFAULT_PLAYER_NAME: &str = "Hero";

/// HP granted per point of total vitality
pub const HP_PER_VIT: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
        }
    }
}

/// The player's character: identity, base stats, equipment and progression.
///
/// Created once per game (or per confirmed character creation) and replaced
/// wholesale rather than reset. Current HP is never raised automatically, but
/// it is pulled down whenever max HP drops below it.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    gender: Gender,
    stats: StatBlock,
    loadout: Loadout,
    progression: Progression,
    current_hp: i32,
}

impl Player {
    pub fn new(name: &str, gender: Gender) -> Self {
        let name = match name.trim() {
            "" => DEFAULT_PLAYER_NAME,
            trimmed => trimmed,
        };

        let mut player = Self {
            name: name.to_string(),
            gender,
            stats: StatBlock::new(),
            loadout: Loadout::new(),
            progression: Progression::new(),
            current_hp: 0,
        };
        player.current_hp = player.max_hp();
        player
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    // Progression

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn experience(&self) -> u32 {
        self.progression.experience()
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.progression.experience_to_next_level()
    }

    pub fn stat_points(&self) -> u32 {
        self.progression.stat_points()
    }

    /// Grant experience, levelling up as many times as it pays for.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        let gained = self.progression.add_experience(amount);
        if gained > 0 {
            info!(
                "{} reached level {} (+{} stat points available: {})",
                self.name,
                self.level(),
                gained * super::progression::STAT_POINTS_PER_LEVEL,
                self.stat_points()
            );
        }
        gained
    }

    // Stats

    /// Base value of a stat (without equipment)
    pub fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    /// Base value plus the bonus of every equipped item, computed on each call
    pub fn total_stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat) + self.loadout.bonus(stat)
    }

    /// Spend one stat point on `stat`.
    ///
    /// Fails without side effects when no points are left or the stat is capped.
    pub fn allocate_stat(&mut self, stat: Stat) -> bool {
        if self.progression.stat_points() == 0 || !self.stats.increment(stat) {
            return false;
        }
        self.progression.spend_stat_point();
        debug!("Allocated 1 point to {} (now {})", stat, self.stat(stat));
        true
    }

    /// Spend up to `amount` points on `stat`, one at a time.
    ///
    /// Rejected outright when `amount` is zero or more than the points
    /// available. Otherwise points are applied until one fails (e.g. the cap
    /// is hit mid-batch); returns true if at least one point landed.
    pub fn allocate_stat_points(&mut self, stat: Stat, amount: u32) -> bool {
        if amount == 0 || amount > self.progression.stat_points() {
            return false;
        }

        let mut applied = 0;
        while applied < amount && self.allocate_stat(stat) {
            applied += 1;
        }
        applied > 0
    }

    /// Name-keyed form of [`Player::allocate_stat`]; unknown names fail
    pub fn allocate_stat_by_name(&mut self, name: &str) -> bool {
        match name.parse::<Stat>() {
            Ok(stat) => self.allocate_stat(stat),
            Err(err) => {
                debug!("Rejected allocation: {}", err);
                false
            }
        }
    }

    /// Name-keyed form of [`Player::allocate_stat_points`]; unknown names fail
    pub fn allocate_stat_points_by_name(&mut self, name: &str, amount: u32) -> bool {
        match name.parse::<Stat>() {
            Ok(stat) => self.allocate_stat_points(stat, amount),
            Err(err) => {
                debug!("Rejected allocation: {}", err);
                false
            }
        }
    }

    // Equipment

    /// Wear an item in its slot, replacing whatever was there.
    /// Passing `None` does nothing.
    pub fn equip(&mut self, item: impl Into<Option<Rc<Equipment>>>) {
        let Some(item) = item.into() else {
            return;
        };
        debug!("Equipped {} ({})", item.name(), item.slot());
        self.loadout.equip(item);
        self.clamp_hp();
    }

    /// Empty a slot; nothing happens if it is already empty
    pub fn unequip(&mut self, slot: EquipmentSlot) {
        if let Some(item) = self.loadout.get(slot) {
            debug!("Unequipped {} ({})", item.name(), slot);
        }
        self.loadout.unequip(slot);
        self.clamp_hp();
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Rc<Equipment>> {
        self.loadout.get(slot)
    }

    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }

    // Health

    pub fn max_hp(&self) -> i32 {
        (self.total_stat(Stat::Vit) * HP_PER_VIT).max(1)
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Set current HP, clamped to [0, max HP]
    pub fn set_current_hp(&mut self, hp: i32) {
        self.current_hp = hp.clamp(0, self.max_hp());
    }

    /// Fill fraction for HP bars, in [0, 1]
    pub fn hp_ratio(&self) -> f32 {
        self.current_hp as f32 / self.max_hp() as f32
    }

    fn clamp_hp(&mut self) {
        self.current_hp = self.current_hp.min(self.max_hp());
    }

    #[cfg(test)]
    pub(crate) fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    #[cfg(test)]
    pub(crate) fn progression_mut(&mut self) -> &mut Progression {
        &mut self.progression
    }
}
