// Character attributes - the six base stats every player allocates into

use std::fmt;
use std::str::FromStr;

/// Hard cap for any single base stat
pub const MAX_STAT_VALUE: i32 = 999;

/// Value every base stat starts at
pub const INITIAL_STAT_VALUE: i32 = 1;

/// The six allocatable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    /// Strength - physical attack
    Str,
    /// Vitality - drives max HP
    Vit,
    /// Agility
    Agi,
    /// Intelligence - scales skill damage
    Int,
    /// Luck
    Luk,
    /// Dexterity
    Dex,
}

impl Stat {
    /// All stats in display order
    pub const ALL: [Stat; 6] = [
        Stat::Str,
        Stat::Vit,
        Stat::Agi,
        Stat::Int,
        Stat::Luk,
        Stat::Dex,
    ];

    /// Short upper-case label ("STR", "VIT", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Vit => "VIT",
            Self::Agi => "AGI",
            Self::Int => "INT",
            Self::Luk => "LUK",
            Self::Dex => "DEX",
        }
    }

    /// Position of this stat inside per-stat arrays
    pub fn index(&self) -> usize {
        match self {
            Self::Str => 0,
            Self::Vit => 1,
            Self::Agi => 2,
            Self::Int => 3,
            Self::Luk => 4,
            Self::Dex => 5,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a stat name does not match any attribute
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown stat name: {0}")]
pub struct StatParseError(pub String);

impl FromStr for Stat {
    type Err = StatParseError;

    /// Case-insensitive lookup of the short label
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .iter()
            .copied()
            .find(|stat| stat.label().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| StatParseError(name.to_string()))
    }
}

/// Base attribute values, each kept in [INITIAL_STAT_VALUE, MAX_STAT_VALUE]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBlock {
    values: [i32; 6],
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            values: [INITIAL_STAT_VALUE; 6],
        }
    }
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current base value of a stat
    pub fn get(&self, stat: Stat) -> i32 {
        self.values[stat.index()]
    }

    /// Whether the stat is already at the cap
    pub fn is_capped(&self, stat: Stat) -> bool {
        self.get(stat) >= MAX_STAT_VALUE
    }

    /// Raise a stat by one point. Returns false (and changes nothing) at the cap.
    pub fn increment(&mut self, stat: Stat) -> bool {
        if self.is_capped(stat) {
            return false;
        }
        self.values[stat.index()] += 1;
        true
    }

    /// Set a stat directly, clamped to the valid range
    #[cfg(test)]
    pub(crate) fn set(&mut self, stat: Stat, value: i32) {
        self.values[stat.index()] = value.clamp(INITIAL_STAT_VALUE, MAX_STAT_VALUE);
    }
}
