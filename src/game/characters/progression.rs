// Experience curve, level-ups and the stat-point economy

/// Level ceiling; experience gained here is banked but never spent
pub const MAX_LEVEL: u32 = 999;

/// Stat points granted on every level-up
pub const STAT_POINTS_PER_LEVEL: u32 = 5;

/// Stat points a fresh character starts with
pub const STARTING_STAT_POINTS: u32 = 10;

/// Experience needed to advance from `level` to `level + 1`.
///
/// The curve restarts its multiplier every ten levels, so it is not
/// monotonic: level 10 needs 1000, level 11 needs 2200, level 20 needs 2000.
pub fn experience_to_next_level(level: u32) -> u32 {
    100 * level * (1 + level % 10)
}

/// Level, banked experience and unspent stat points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    level: u32,
    experience: u32,
    stat_points: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            stat_points: STARTING_STAT_POINTS,
        }
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn stat_points(&self) -> u32 {
        self.stat_points
    }

    /// Threshold for the current level
    pub fn experience_to_next_level(&self) -> u32 {
        experience_to_next_level(self.level)
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    /// Add experience and apply every level-up it pays for.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        while self.level < MAX_LEVEL && self.experience >= self.experience_to_next_level() {
            self.experience -= self.experience_to_next_level();
            self.level_up();
            gained += 1;
        }
        gained
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.stat_points += STAT_POINTS_PER_LEVEL;
    }

    /// Spend one stat point. Returns false when none are left.
    pub fn spend_stat_point(&mut self) -> bool {
        if self.stat_points == 0 {
            return false;
        }
        self.stat_points -= 1;
        true
    }

    #[cfg(test)]
    pub(crate) fn with_state(level: u32, experience: u32, stat_points: u32) -> Self {
        Self {
            level: level.clamp(1, MAX_LEVEL),
            experience,
            stat_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_values() {
        assert_eq!(experience_to_next_level(1), 200);
        assert_eq!(experience_to_next_level(9), 9000);
        assert_eq!(experience_to_next_level(10), 1000);
        assert_eq!(experience_to_next_level(11), 2200);
        assert_eq!(experience_to_next_level(20), 2000);
    }

    #[test]
    fn test_curve_formula_holds_everywhere() {
        for level in 1..=MAX_LEVEL {
            assert_eq!(
                experience_to_next_level(level),
                100 * level * (1 + level % 10)
            );
        }
    }

    #[test]
    fn test_initial_state() {
        let progression = Progression::new();
        assert_eq!(progression.level(), 1);
        assert_eq!(progression.experience(), 0);
        assert_eq!(progression.stat_points(), STARTING_STAT_POINTS);
    }

    #[test]
    fn test_single_level_up_keeps_remainder() {
        let mut progression = Progression::new();
        let gained = progression.add_experience(250);

        assert_eq!(gained, 1);
        assert_eq!(progression.level(), 2);
        assert_eq!(progression.experience(), 50);
        assert_eq!(progression.stat_points(), 15);
    }

    #[test]
    fn test_split_grants_match_single_grant() {
        let mut split = Progression::new();
        split.add_experience(120);
        split.add_experience(120);

        let mut single = Progression::new();
        single.add_experience(240);

        assert_eq!(split, single);
        assert_eq!(single.level(), 2);
        assert_eq!(single.experience(), 40);
    }

    #[test]
    fn test_multi_level_gain_in_one_call() {
        let mut progression = Progression::new();
        // 200 (L1) + 600 (L2) + 1200 (L3) + 5 spare
        let gained = progression.add_experience(2005);

        assert_eq!(gained, 3);
        assert_eq!(progression.level(), 4);
        assert_eq!(progression.experience(), 5);
        assert_eq!(progression.stat_points(), STARTING_STAT_POINTS + 15);
    }

    #[test]
    fn test_below_threshold_does_not_level() {
        let mut progression = Progression::new();
        assert_eq!(progression.add_experience(199), 0);
        assert_eq!(progression.level(), 1);
        assert_eq!(progression.experience(), 199);
    }

    #[test]
    fn test_max_level_banks_experience() {
        let mut progression = Progression::with_state(MAX_LEVEL - 1, 0, 0);
        let needed = experience_to_next_level(MAX_LEVEL - 1);

        progression.add_experience(needed + 1_000_000);

        assert_eq!(progression.level(), MAX_LEVEL);
        assert!(progression.is_max_level());
        assert_eq!(progression.experience(), 1_000_000);
        assert_eq!(progression.stat_points(), STAT_POINTS_PER_LEVEL);

        // Further experience is kept but never consumed
        progression.add_experience(50);
        assert_eq!(progression.level(), MAX_LEVEL);
        assert_eq!(progression.experience(), 1_000_050);
    }

    #[test]
    fn test_spend_stat_point() {
        let mut progression = Progression::with_state(1, 0, 1);
        assert!(progression.spend_stat_point());
        assert_eq!(progression.stat_points(), 0);
        assert!(!progression.spend_stat_point());
        assert_eq!(progression.stat_points(), 0);
    }
}
