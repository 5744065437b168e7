//! Match snapshot — the complete visible state handed to the rendering
//! collaborator after each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::stats::MatchStats;
use crate::types::{CellPos, SimTime};

/// Complete per-tick state for rendering and end-of-match display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub tiles: Vec<TileView>,
    pub players: Vec<PlayerView>,
    pub projectiles: Vec<ProjectileView>,
    pub ghosts: Vec<GhostView>,
    pub boxes: Vec<ItemBoxView>,
    pub airship: Option<AirshipView>,
    pub stats: MatchStats,
    pub events: Vec<SimEvent>,
}

/// One placed tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TileView {
    pub cell: CellPos,
    pub kind: TileKind,
}

/// Cannon occupancy details for a manning player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MannedCannonView {
    pub cell: CellPos,
    pub kind: TileKind,
    /// Barrel angle in degrees.
    pub aim_angle: f32,
}

/// One combatant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub position: Vec2,
    pub hp: i32,
    pub ammo: i32,
    pub explosive_charges: u32,
    pub facing_right: bool,
    pub on_ground: bool,
    pub cannon: Option<MannedCannonView>,
}

/// One projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub owner: PlayerId,
    pub explosive: bool,
}

/// One ghost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GhostView {
    pub position: Vec2,
    pub hp: i32,
    pub owner: PlayerId,
    pub target: PlayerId,
}

/// One falling supply box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemBoxView {
    pub kind: BoxKind,
    pub position: Vec2,
}

/// The supply airship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirshipView {
    pub position: Vec2,
    pub direction: f32,
}
