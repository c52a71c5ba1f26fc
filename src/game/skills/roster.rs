// Random skill roster generation

use rand::Rng;

use super::skill::Skill;

/// Parameters for generating a skill roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterConfig {
    /// Number of skills to create
    pub count: usize,
    /// Lowest possible unlock level of the first skill
    pub first_unlock_min: u32,
    /// Highest possible unlock level of the first skill
    pub first_unlock_max: u32,
    /// Guaranteed level gap between consecutive unlocks
    pub min_level_gap: u32,
    /// Extra random gap added on top of `min_level_gap` (inclusive)
    pub max_gap_jitter: u32,
    pub base_power_min: i32,
    pub base_power_max: i32,
    pub skill_multiplier_min: f64,
    pub skill_multiplier_max: f64,
    pub int_multiplier_max: f64,
    /// Cooldown given to every generated skill, in seconds
    pub cooldown: f32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            count: 20,
            first_unlock_min: 2,
            first_unlock_max: 10,
            min_level_gap: 8,
            max_gap_jitter: 4,
            base_power_min: 10,
            base_power_max: 100,
            skill_multiplier_min: 1.0,
            skill_multiplier_max: 5.0,
            int_multiplier_max: 2.0,
            cooldown: 5.0,
        }
    }
}

/// Round to two decimal places
fn round2(value: f64) -> f32 {
    ((value * 100.0).round() / 100.0) as f32
}

/// Generate `config.count` skills named `Skill_1`, `Skill_2`, ... with
/// strictly increasing, well-spaced unlock levels.
pub fn generate_roster(config: &RosterConfig, rng: &mut impl Rng) -> Vec<Skill> {
    let mut skills = Vec::with_capacity(config.count);
    let mut unlock_level = rng.gen_range(config.first_unlock_min..=config.first_unlock_max);

    for i in 0..config.count {
        let base_power = rng.gen_range(config.base_power_min..=config.base_power_max);
        let skill_multiplier =
            round2(rng.gen_range(config.skill_multiplier_min..=config.skill_multiplier_max));
        let int_multiplier = round2(rng.gen_range(0.0..=config.int_multiplier_max));

        skills.push(Skill::new(
            &format!("Skill_{}", i + 1),
            unlock_level,
            base_power,
            skill_multiplier,
            int_multiplier,
            config.cooldown,
        ));

        unlock_level += config.min_level_gap + rng.gen_range(0..=config.max_gap_jitter);
    }

    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(seed: u64) -> Vec<Skill> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_roster(&RosterConfig::default(), &mut rng)
    }

    fn has_two_decimals(value: f32) -> bool {
        let scaled = value as f64 * 100.0;
        (scaled - scaled.round()).abs() < 1e-3
    }

    #[test]
    fn test_same_seed_same_roster() {
        assert_eq!(roster(42), roster(42));
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(roster(1), roster(2));
    }

    #[test]
    fn test_count_and_names() {
        let skills = roster(7);
        assert_eq!(skills.len(), 20);
        assert_eq!(skills[0].name(), "Skill_1");
        assert_eq!(skills[19].name(), "Skill_20");
    }

    #[test]
    fn test_unlock_levels_are_spaced() {
        for seed in 0..20 {
            let skills = roster(seed);
            let first = skills[0].unlock_level();
            assert!((2..=10).contains(&first), "First unlock {} out of range", first);

            for pair in skills.windows(2) {
                let gap = pair[1].unlock_level() - pair[0].unlock_level();
                assert!((8..=12).contains(&gap), "Gap {} out of range", gap);
            }
        }
    }

    #[test]
    fn test_values_within_ranges() {
        for seed in 0..20 {
            for skill in roster(seed) {
                assert!((10..=100).contains(&skill.base_power()));
                assert!((1.0..=5.0).contains(&skill.skill_multiplier()));
                assert!((0.0..=2.0).contains(&skill.int_multiplier()));
                assert!(has_two_decimals(skill.skill_multiplier()));
                assert!(has_two_decimals(skill.int_multiplier()));
                assert_eq!(skill.cooldown(), 5.0);
                assert!(skill.is_ready());
            }
        }
    }

    #[test]
    fn test_custom_config() {
        let config = RosterConfig {
            count: 3,
            first_unlock_min: 1,
            first_unlock_max: 1,
            min_level_gap: 2,
            max_gap_jitter: 0,
            cooldown: 1.5,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(9);
        let skills = generate_roster(&config, &mut rng);

        let levels: Vec<_> = skills.iter().map(|s| s.unlock_level()).collect();
        assert_eq!(levels, vec![1, 3, 5]);
        assert!(skills.iter().all(|s| s.cooldown() == 1.5));
    }
}
