//! Events emitted by the simulation for audio and effects feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{BoxKind, PlayerId, ProjectileKind, TileKind};
use crate::types::CellPos;

/// One-shot events drained into each snapshot for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A player manned a cannon.
    CannonEntered { player: PlayerId, kind: TileKind },
    /// A player left their cannon.
    CannonExited { player: PlayerId },
    /// A volley left a cannon.
    ShotFired {
        player: PlayerId,
        kind: ProjectileKind,
        explosive: bool,
    },
    /// A stone block was placed mid-air.
    BlockPlaced { player: PlayerId, cell: CellPos },
    /// A bomb detonated.
    BombExploded {
        x: f32,
        y: f32,
        stones_destroyed: u32,
    },
    /// The airship released a supply box.
    BoxDropped { kind: BoxKind },
    /// A player picked up a supply box.
    BoxCollected { player: PlayerId, kind: BoxKind },
    /// A ghost was summoned against `target`.
    GhostSummoned { player: PlayerId, target: PlayerId },
    /// A ghost died to a projectile; the kill goes to `player`.
    GhostKilled { player: PlayerId },
    /// A player took damage. `player` is the victim.
    PlayerHit { player: PlayerId, damage: i32 },
    /// A player died; the match is over.
    PlayerDied { player: PlayerId },
}
