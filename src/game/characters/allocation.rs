// Staged stat allocation for the stat panel

use log::debug;

use super::character::Player;
use super::stats::{Stat, MAX_STAT_VALUE};

/// Points the player has queued on the stat panel but not yet spent.
///
/// The draft never queues more points than the player has, nor pushes a
/// stat's base value + pending past the cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatAllocationDraft {
    pending: [u32; 6],
}

impl StatAllocationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self, stat: Stat) -> u32 {
        self.pending[stat.index()]
    }

    pub fn total_pending(&self) -> u32 {
        self.pending.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_pending() == 0
    }

    /// Queue one more point on `stat`. Returns false if nothing is left to queue.
    pub fn add(&mut self, stat: Stat, player: &Player) -> bool {
        let projected = player.stat(stat) + self.pending(stat) as i32;
        if self.total_pending() >= player.stat_points() || projected >= MAX_STAT_VALUE {
            return false;
        }
        self.pending[stat.index()] += 1;
        true
    }

    /// Take one queued point back off `stat`
    pub fn remove(&mut self, stat: Stat) -> bool {
        let slot = &mut self.pending[stat.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn clear(&mut self) {
        self.pending = [0; 6];
    }

    /// Spend every queued point on the player and empty the draft.
    /// Returns the number of points actually applied.
    ///
    /// Points spent elsewhere after staging shrink what can land; each stat's
    /// pending count is cut down to what the player still has.
    pub fn commit(&mut self, player: &mut Player) -> u32 {
        let before = player.stat_points();
        for stat in Stat::ALL {
            let amount = self.pending(stat).min(player.stat_points());
            if amount > 0 {
                player.allocate_stat_points(stat, amount);
            }
        }
        self.clear();

        let applied = before - player.stat_points();
        debug!("Committed {} stat points", applied);
        applied
    }
}
