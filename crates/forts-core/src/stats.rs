//! Running match statistics.
//!
//! Mutated only by the simulation step; the renderer reads them from the
//! snapshot for the in-game panels and the end-of-match summary.

use serde::{Deserialize, Serialize};

use crate::enums::PlayerId;

/// Per-player counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    /// Incremented by the ammo cost of each volley, so multi-projectile
    /// cannons count every round.
    pub shots_fired: u32,
    pub hits: u32,
    pub damage_dealt: u32,
    pub blocks_placed: u32,
    pub boxes_collected: u32,
    pub ghosts_summoned: u32,
    pub ghosts_killed: u32,
    pub deaths: u32,
}

/// Aggregate match bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub players: [PlayerTally; 2],
    pub winner: Option<PlayerId>,
    pub game_time_secs: f64,
}

impl MatchStats {
    pub fn tally(&self, id: PlayerId) -> &PlayerTally {
        &self.players[id.index()]
    }

    pub fn tally_mut(&mut self, id: PlayerId) -> &mut PlayerTally {
        &mut self.players[id.index()]
    }

    /// Record one damaging hit credited to `owner`.
    pub fn record_hit(&mut self, owner: PlayerId, damage: i32) {
        let tally = self.tally_mut(owner);
        tally.hits += 1;
        tally.damage_dealt += damage.max(0) as u32;
    }
}
