//! Player commands sent from the input collaborator to the simulation.
//!
//! Discrete key-down actions arrive as individual commands; held movement
//! keys arrive as `SetHeld` state changes. Commands are queued and applied
//! at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::PlayerId;

/// Movement keys currently held for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Replace the held-key state for one player.
    SetHeld { player: PlayerId, held: HeldKeys },
    /// Enter the nearest cannon, or leave the current one.
    ToggleCannon { player: PlayerId },
    /// Fire the occupied cannon (no-op when not manning one).
    Fire { player: PlayerId },
    /// Place a stone block under the player's feet while airborne.
    PlaceBlock { player: PlayerId },
}
