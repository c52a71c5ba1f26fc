// A single skill: unlock gate, damage formula and cooldown timer

/// Whether a skill can be fired right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooldownState {
    /// Timer at zero, activation allowed
    Ready,
    /// Timer counting down, activation rejected
    Cooling,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    name: String,
    unlock_level: u32,
    base_power: i32,
    skill_multiplier: f32,
    int_multiplier: f32,
    /// Seconds the skill stays unavailable after use
    cooldown: f32,
    /// Seconds left until the skill is ready again
    cooldown_timer: f32,
}

impl Skill {
    pub fn new(
        name: &str,
        unlock_level: u32,
        base_power: i32,
        skill_multiplier: f32,
        int_multiplier: f32,
        cooldown: f32,
    ) -> Self {
        Self {
            name: name.to_string(),
            unlock_level,
            base_power,
            skill_multiplier,
            int_multiplier,
            cooldown,
            cooldown_timer: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unlock_level(&self) -> u32 {
        self.unlock_level
    }

    pub fn base_power(&self) -> i32 {
        self.base_power
    }

    pub fn skill_multiplier(&self) -> f32 {
        self.skill_multiplier
    }

    pub fn int_multiplier(&self) -> f32 {
        self.int_multiplier
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    pub fn set_cooldown(&mut self, seconds: f32) {
        self.cooldown = seconds.max(0.0);
    }

    pub fn cooldown_timer(&self) -> f32 {
        self.cooldown_timer
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= self.unlock_level
    }

    pub fn cooldown_state(&self) -> CooldownState {
        if self.cooldown_timer > 0.0 {
            CooldownState::Cooling
        } else {
            CooldownState::Ready
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_state() == CooldownState::Ready
    }

    /// Damage dealt with the given attack and intelligence values.
    ///
    /// `(base * skill_mult) * (1 + int_mult / 100) + atk + int * int_mult`,
    /// truncated toward zero. The int multiplier is scaled by 1/100 only in
    /// the multiplicative term.
    pub fn calculate_damage(&self, atk: i32, int: i32) -> i32 {
        let scaled = (self.base_power as f32 * self.skill_multiplier)
            * (1.0 + self.int_multiplier / 100.0);
        (scaled + atk as f32 + int as f32 * self.int_multiplier) as i32
    }

    /// Fire the skill if it is ready: starts the cooldown and returns the damage.
    /// Returns `None` without touching the timer while cooling down.
    pub fn try_activate(&mut self, atk: i32, int: i32) -> Option<i32> {
        if !self.is_ready() {
            return None;
        }
        let damage = self.calculate_damage(atk, int);
        self.cooldown_timer = self.cooldown;
        Some(damage)
    }

    /// Count the cooldown down by `dt` seconds, stopping at zero
    pub fn tick(&mut self, dt: f32) {
        if self.cooldown_timer > 0.0 {
            self.cooldown_timer = (self.cooldown_timer - dt).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball() -> Skill {
        Skill::new("Fireball", 5, 50, 2.0, 1.5, 5.0)
    }

    #[test]
    fn test_new_skill_is_ready() {
        let skill = fireball();
        assert_eq!(skill.name(), "Fireball");
        assert_eq!(skill.cooldown_timer(), 0.0);
        assert_eq!(skill.cooldown_state(), CooldownState::Ready);
    }

    #[test]
    fn test_unlock_gate() {
        let skill = fireball();
        assert!(!skill.is_unlocked(4));
        assert!(skill.is_unlocked(5));
        assert!(skill.is_unlocked(6));
    }

    #[test]
    fn test_damage_formula() {
        // 100 * 1.015 + 10 + 4 * 1.5 = 117.5
        assert_eq!(fireball().calculate_damage(10, 4), 117);
    }

    #[test]
    fn test_damage_int_term_is_unscaled() {
        let skill = Skill::new("Bolt", 1, 10, 1.0, 2.0, 5.0);
        // 10 * 1.02 + 0 + 100 * 2.0 = 210.2
        assert_eq!(skill.calculate_damage(0, 100), 210);
    }

    #[test]
    fn test_damage_truncates_toward_zero() {
        let skill = Skill::new("Weak", 1, 1, 1.5, 0.0, 5.0);
        assert_eq!(skill.calculate_damage(0, 0), 1);
        // 1.5 - 3 = -1.5
        assert_eq!(skill.calculate_damage(-3, 0), -1);
    }

    #[test]
    fn test_cooldown_cycle() {
        let mut skill = fireball();
        assert_eq!(skill.try_activate(1, 1), Some(skill.calculate_damage(1, 1)));
        assert_eq!(skill.cooldown_timer(), 5.0);

        for _ in 0..3 {
            skill.tick(1.0);
        }
        assert_eq!(skill.cooldown_timer(), 2.0);
        assert_eq!(skill.cooldown_state(), CooldownState::Cooling);

        // Rejected while cooling; timer untouched
        assert_eq!(skill.try_activate(1, 1), None);
        assert_eq!(skill.cooldown_timer(), 2.0);

        skill.tick(1.0);
        skill.tick(1.0);
        assert_eq!(skill.cooldown_timer(), 0.0);
        assert!(skill.is_ready());
        assert!(skill.try_activate(1, 1).is_some());
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut skill = fireball();
        skill.try_activate(0, 0);
        skill.tick(7.5);
        assert_eq!(skill.cooldown_timer(), 0.0);

        // Ticking a ready skill keeps it at zero
        skill.tick(1.0);
        assert_eq!(skill.cooldown_timer(), 0.0);
    }

    #[test]
    fn test_set_cooldown() {
        let mut skill = fireball();
        skill.set_cooldown(1.5);
        skill.try_activate(0, 0);
        assert_eq!(skill.cooldown_timer(), 1.5);

        skill.set_cooldown(-2.0);
        assert_eq!(skill.cooldown(), 0.0);
    }
}
