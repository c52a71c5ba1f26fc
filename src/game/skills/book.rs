// Skill book - the player's roster of skills and their hotkey view

use log::{debug, info};
use rand::Rng;

use super::roster::{generate_roster, RosterConfig};
use super::skill::Skill;
use crate::game::characters::{Player, Stat};

/// Outcome of a successful skill activation
#[derive(Debug, Clone, PartialEq)]
pub struct SkillUse {
    /// Index into the full roster
    pub skill_index: usize,
    pub name: String,
    pub damage: i32,
}

#[derive(Debug, Clone, Default)]
pub struct SkillBook {
    skills: Vec<Skill>,
    last_use: Option<SkillUse>,
}

impl SkillBook {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self {
            skills,
            last_use: None,
        }
    }

    /// Build a fresh random roster
    pub fn generate(config: &RosterConfig, rng: &mut impl Rng) -> Self {
        let skills = generate_roster(config, rng);
        info!(
            "Generated {} skills (first unlock at level {})",
            skills.len(),
            skills.first().map_or(0, |s| s.unlock_level())
        );
        Self::new(skills)
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills available at `level`, in roster order, with their roster index
    pub fn unlocked(&self, level: u32) -> impl Iterator<Item = (usize, &Skill)> + '_ {
        self.skills
            .iter()
            .enumerate()
            .filter(move |(_, skill)| skill.is_unlocked(level))
    }

    pub fn unlocked_count(&self, level: u32) -> usize {
        self.unlocked(level).count()
    }

    /// Advance every cooldown by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for skill in &mut self.skills {
            skill.tick(dt);
        }
    }

    /// Fire the `unlocked_index`-th unlocked skill for `player`.
    ///
    /// Damage uses the player's base STR and INT (equipment bonuses are not
    /// included). Returns `None` if no such unlocked skill exists or it is
    /// still cooling down.
    pub fn activate(&mut self, unlocked_index: usize, player: &Player) -> Option<SkillUse> {
        let level = player.level();
        let (skill_index, _) = self.unlocked(level).nth(unlocked_index)?;

        let skill = &mut self.skills[skill_index];
        let damage = skill.try_activate(player.stat(Stat::Str), player.stat(Stat::Int))?;

        debug!("{} hit for {} damage", skill.name(), damage);
        let used = SkillUse {
            skill_index,
            name: skill.name().to_string(),
            damage,
        };
        self.last_use = Some(used.clone());
        Some(used)
    }

    pub fn last_use(&self) -> Option<&SkillUse> {
        self.last_use.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::Gender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn book() -> SkillBook {
        SkillBook::new(vec![
            Skill::new("Slash", 1, 10, 1.0, 0.0, 5.0),
            Skill::new("Spark", 3, 20, 2.0, 1.0, 5.0),
            Skill::new("Nova", 10, 50, 3.0, 2.0, 5.0),
        ])
    }

    #[test]
    fn test_unlocked_filters_by_level() {
        let book = book();
        assert_eq!(book.unlocked_count(1), 1);
        assert_eq!(book.unlocked_count(3), 2);
        assert_eq!(book.unlocked_count(10), 3);

        let names: Vec<_> = book.unlocked(5).map(|(_, s)| s.name()).collect();
        assert_eq!(names, vec!["Slash", "Spark"]);
    }

    #[test]
    fn test_activate_uses_base_stats() {
        let mut book = book();
        let player = Player::new("Tester", Gender::Male);

        // 10 * 1.0 * 1.0 + STR 1 + INT 1 * 0.0 = 11
        let used = book.activate(0, &player).unwrap();
        assert_eq!(used.name, "Slash");
        assert_eq!(used.skill_index, 0);
        assert_eq!(used.damage, 11);
        assert_eq!(book.last_use(), Some(&used));
    }

    #[test]
    fn test_activate_locked_or_missing_index() {
        let mut book = book();
        let player = Player::new("Tester", Gender::Male);

        assert!(book.activate(1, &player).is_none());
        assert!(book.activate(99, &player).is_none());
        assert!(book.last_use().is_none());
    }

    #[test]
    fn test_activate_respects_cooldown() {
        let mut book = book();
        let player = Player::new("Tester", Gender::Male);

        assert!(book.activate(0, &player).is_some());
        assert!(book.activate(0, &player).is_none());

        book.tick(5.0);
        assert!(book.activate(0, &player).is_some());
    }

    #[test]
    fn test_generate_from_seed() {
        let mut rng = StdRng::seed_from_u64(3);
        let book = SkillBook::generate(&RosterConfig::default(), &mut rng);
        assert_eq!(book.len(), 20);
        assert_eq!(book.unlocked_count(1), 0);
        assert_eq!(book.unlocked_count(999), 20);
    }
}
