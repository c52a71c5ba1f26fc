// Game session - owns the hero, their skills and the map, and applies input

use glam::Vec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::input::{Action, PlayerInput};
use crate::engine::physics::{MapError, TileMap};
use crate::game::catalog::EquipmentCatalog;
use crate::game::characters::{
    EquipmentSlot, Gender, Player, PlayerEntity, Stat, StatAllocationDraft, DEFAULT_PLAYER_NAME,
};
use crate::game::hud::{HudSnapshot, SkillLine, StatLine};
use crate::game::skills::{RosterConfig, SkillBook};

/// Experience granted by the debug action
pub const DEBUG_EXPERIENCE: u32 = 120;

/// Where the hero appears on the demo map
pub const SPAWN_POINT: Vec2 = Vec2::new(240.0, 0.0);

pub struct GameSession {
    player: Player,
    skills: SkillBook,
    entity: PlayerEntity,
    map: TileMap,
    catalog: EquipmentCatalog,
    draft: StatAllocationDraft,
    roster_config: RosterConfig,
    rng: StdRng,
}

impl GameSession {
    pub fn new(map: TileMap, spawn: Vec2, roster_config: RosterConfig, mut rng: StdRng) -> Self {
        let gender = Gender::default();
        let player = Player::new(DEFAULT_PLAYER_NAME, gender);
        let skills = SkillBook::generate(&roster_config, &mut rng);

        Self {
            player,
            skills,
            entity: PlayerEntity::new(spawn, gender),
            map,
            catalog: EquipmentCatalog::default(),
            draft: StatAllocationDraft::new(),
            roster_config,
            rng,
        }
    }

    /// Session on the built-in map with an entropy-seeded roster
    pub fn demo() -> Result<Self, MapError> {
        Ok(Self::new(
            TileMap::demo()?,
            SPAWN_POINT,
            RosterConfig::default(),
            StdRng::from_entropy(),
        ))
    }

    /// Replace the hero with a fresh level 1 character and reroll the skills
    pub fn new_character(&mut self, name: &str, gender: Gender) {
        self.player = Player::new(name, gender);
        self.skills = SkillBook::generate(&self.roster_config, &mut self.rng);
        self.entity.set_gender(gender);
        self.draft.clear();
        info!("Created character {} ({})", self.player.name(), gender);
    }

    /// Advance one tick: cooldowns, then this frame's commands, then movement
    pub fn update(&mut self, dt: f32, input: &PlayerInput) {
        self.skills.tick(dt);

        for action in input.commands() {
            self.handle_action(action);
        }

        self.entity.update(&self.map, input.move_intent(), dt);
    }

    /// Apply a single command. Returns false when it was rejected or is not a
    /// session command (movement and meta actions).
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::AllocateStat(stat) => self.player.allocate_stat(stat),
            Action::AllocateStatPoints(stat, amount) => {
                self.player.allocate_stat_points(stat, amount)
            }
            Action::StageStat(stat) => self.stage_stat(stat),
            Action::UnstageStat(stat) => self.unstage_stat(stat),
            Action::CommitStats => self.commit_staged() > 0,
            Action::ClearStaged => {
                let had_pending = !self.draft.is_empty();
                self.draft.clear();
                had_pending
            }
            Action::Equip(index) => self.equip_from_catalog(index),
            Action::Unequip(slot) => self.unequip(slot),
            Action::UseSkill(index) => self.skills.activate(index, &self.player).is_some(),
            Action::GainExperience => {
                self.player.add_experience(DEBUG_EXPERIENCE);
                true
            }
            Action::MoveLeft | Action::MoveRight | Action::Jump | Action::Pause | Action::Menu => {
                false
            }
        }
    }

    /// Equip catalog item `index`; out-of-range indices do nothing
    pub fn equip_from_catalog(&mut self, index: usize) -> bool {
        match self.catalog.get(index) {
            Some(item) => {
                self.player.equip(item);
                true
            }
            None => {
                debug!("No catalog item at index {}", index);
                false
            }
        }
    }

    fn unequip(&mut self, slot: EquipmentSlot) -> bool {
        let occupied = self.player.equipped(slot).is_some();
        self.player.unequip(slot);
        occupied
    }

    // Staged allocation

    pub fn stage_stat(&mut self, stat: Stat) -> bool {
        self.draft.add(stat, &self.player)
    }

    pub fn unstage_stat(&mut self, stat: Stat) -> bool {
        self.draft.remove(stat)
    }

    /// Spend every staged point; returns how many landed
    pub fn commit_staged(&mut self) -> u32 {
        self.draft.commit(&mut self.player)
    }

    pub fn draft(&self) -> &StatAllocationDraft {
        &self.draft
    }

    // Accessors

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn skills(&self) -> &SkillBook {
        &self.skills
    }

    pub fn entity(&self) -> &PlayerEntity {
        &self.entity
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    /// Copy out everything the HUD shows
    pub fn snapshot(&self) -> HudSnapshot {
        let player = &self.player;
        let level = player.level();

        HudSnapshot {
            name: player.name().to_string(),
            gender: player.gender(),
            level,
            experience: player.experience(),
            experience_to_next_level: player.experience_to_next_level(),
            stat_points: player.stat_points(),
            stats: Stat::ALL
                .into_iter()
                .map(|stat| StatLine {
                    stat,
                    base: player.stat(stat),
                    total: player.total_stat(stat),
                })
                .collect(),
            max_hp: player.max_hp(),
            current_hp: player.current_hp(),
            equipped: player
                .loadout()
                .iter()
                .map(|(slot, item)| (slot, item.map(|item| item.name().to_string())))
                .collect(),
            skills: self
                .skills
                .unlocked(level)
                .map(|(_, skill)| SkillLine {
                    name: skill.name().to_string(),
                    unlock_level: skill.unlock_level(),
                    base_power: skill.base_power(),
                    skill_multiplier: skill.skill_multiplier(),
                    int_multiplier: skill.int_multiplier(),
                    cooldown: skill.cooldown(),
                    cooldown_timer: skill.cooldown_timer(),
                })
                .collect(),
            last_skill: self.skills.last_use().cloned(),
            position: self.entity.position(),
            velocity: self.entity.velocity(),
            on_ground: self.entity.on_ground(),
            motion: self.entity.state(),
        }
    }
}
