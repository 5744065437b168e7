//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in the simulation systems.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BoxKind, PlayerId, ProjectileKind};
use crate::types::{Aabb, CellPos};

/// Body center in stage space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Velocity in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Collision body extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub size: Vec2,
}

impl Body {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Bounding box for this body centered at `center`.
    pub fn aabb_at(&self, center: Vec2) -> Aabb {
        Aabb::from_center_size(center, self.size)
    }
}

/// A combatant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub hp: i32,
    pub ammo: i32,
    pub facing_right: bool,
    pub on_ground: bool,
    /// Explosive-charge shots remaining from a pickup (0 = inactive).
    pub explosive_charges: u32,
    /// Cell of the cannon this player is manning, if any.
    /// Re-resolved against the grid; never owns the tile.
    pub occupied_cannon: Option<CellPos>,
    /// Barrel angle in degrees, meaningful only while manning a cannon.
    pub aim_angle: f32,
    /// Tick of the last shot, for cooldown checks.
    pub last_shot_tick: Option<u64>,
}

impl PlayerState {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hp: crate::constants::PLAYER_MAX_HP,
            ammo: crate::constants::PLAYER_START_AMMO,
            facing_right: id == PlayerId::One,
            on_ground: false,
            explosive_charges: 0,
            occupied_cannon: None,
            aim_angle: crate::constants::AIM_ENTER_DEG,
            last_shot_tick: None,
        }
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileState {
    pub kind: ProjectileKind,
    pub owner: PlayerId,
    /// Fired with an explosive charge: more damage plus one pierce.
    pub explosive: bool,
    /// The one pierce has been spent.
    pub has_pierced: bool,
    /// Remaining bounce budget (Ricochet only; 0 for other kinds).
    pub bounces_left: i32,
}

/// A summoned ghost homing on its target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GhostState {
    pub owner: PlayerId,
    pub target: PlayerId,
    pub hp: i32,
}

/// A falling supply box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemBoxState {
    pub kind: BoxKind,
}

/// The supply airship patrolling the top of the stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AirshipState {
    /// Patrol direction, +1 right / -1 left.
    pub direction: f32,
    /// Tick of the last drop roll.
    pub last_drop_tick: u64,
}
