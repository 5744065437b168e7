//! Enumeration types used throughout the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the two combatants. Doubles as an index into per-player arrays
/// and as a non-owning handle (a ghost's target outlives nothing — the
/// player list is fixed for the whole match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Everything that can occupy a grid cell.
///
/// Ground and Stone are destructible terrain; the six cannon kinds are
/// emplacements — terrain-occupying tiles a player can also man.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TileKind {
    Ground,
    Stone,
    CannonNormal,
    CannonTriple,
    CannonBomb,
    CannonRicochet,
    CannonShield,
    CannonSniper,
}

/// Per-cannon firing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannonSpec {
    /// Minimum time between shots, in milliseconds.
    pub cooldown_ms: u64,
    /// Ammo consumed per trigger pull (the whole volley).
    pub ammo_cost: i32,
}

impl TileKind {
    /// Wire id used in map files. 0 is air and never persisted.
    pub fn type_id(&self) -> u8 {
        match self {
            TileKind::Ground => 1,
            TileKind::Stone => 2,
            TileKind::CannonNormal => 3,
            TileKind::CannonTriple => 4,
            TileKind::CannonBomb => 5,
            TileKind::CannonRicochet => 6,
            TileKind::CannonShield => 7,
            TileKind::CannonSniper => 8,
        }
    }

    pub fn from_type_id(id: u8) -> Option<TileKind> {
        match id {
            1 => Some(TileKind::Ground),
            2 => Some(TileKind::Stone),
            3 => Some(TileKind::CannonNormal),
            4 => Some(TileKind::CannonTriple),
            5 => Some(TileKind::CannonBomb),
            6 => Some(TileKind::CannonRicochet),
            7 => Some(TileKind::CannonShield),
            8 => Some(TileKind::CannonSniper),
            _ => None,
        }
    }

    pub fn is_cannon(&self) -> bool {
        !matches!(self, TileKind::Ground | TileKind::Stone)
    }

    /// Firing parameters, for cannon kinds only.
    pub fn cannon_spec(&self) -> Option<CannonSpec> {
        let (cooldown_ms, ammo_cost) = match self {
            TileKind::CannonNormal => (250, 1),
            TileKind::CannonTriple => (400, 3),
            TileKind::CannonBomb => (600, 2),
            TileKind::CannonRicochet => (350, 1),
            TileKind::CannonShield => (1500, 8),
            TileKind::CannonSniper => (1200, 1),
            TileKind::Ground | TileKind::Stone => return None,
        };
        Some(CannonSpec {
            cooldown_ms,
            ammo_cost,
        })
    }
}

/// The five projectile behavior variants.
///
/// Motion model, collision response, and damage are all keyed off this
/// tag; the firing logic picks the kind from the occupied cannon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Plain cannonball (Normal and Triple cannons).
    Shell,
    /// Heavy bomb with an area blast.
    Bomb,
    /// Bounces off walls and tiles before it can connect.
    Ricochet,
    /// No gravity, very fast, flat trajectory.
    Sniper,
    /// One of the eight pellets of a radial burst.
    Shield,
}

impl ProjectileKind {
    /// Muzzle speed in pixels per tick.
    pub fn launch_speed(&self) -> f32 {
        match self {
            ProjectileKind::Shell => 16.0,
            ProjectileKind::Bomb => 12.0,
            ProjectileKind::Ricochet => 14.0,
            ProjectileKind::Sniper => 30.0,
            ProjectileKind::Shield => 12.0,
        }
    }

    /// Per-tick downward acceleration.
    pub fn gravity(&self) -> f32 {
        match self {
            ProjectileKind::Shell => 0.15,
            ProjectileKind::Bomb => 0.4,
            ProjectileKind::Ricochet => 0.1,
            ProjectileKind::Sniper => 0.0,
            ProjectileKind::Shield => 0.08,
        }
    }

    /// Damage on a direct player hit.
    pub fn damage(&self, explosive: bool) -> i32 {
        match (self, explosive) {
            (ProjectileKind::Shell, false) => 20,
            (ProjectileKind::Shell, true) => 30,
            (ProjectileKind::Bomb, false) => 35,
            (ProjectileKind::Bomb, true) => 45,
            (ProjectileKind::Ricochet, false) => 15,
            (ProjectileKind::Ricochet, true) => 25,
            (ProjectileKind::Sniper, false) => 40,
            (ProjectileKind::Sniper, true) => 55,
            (ProjectileKind::Shield, false) => 10,
            (ProjectileKind::Shield, true) => 15,
        }
    }

    /// Damage dealt to a ghost. Bombs fly straight through ghosts.
    pub fn ghost_damage(&self, explosive: bool) -> Option<i32> {
        let dmg = match (self, explosive) {
            (ProjectileKind::Bomb, _) => return None,
            (ProjectileKind::Shell, false) => 30,
            (ProjectileKind::Shell, true) => 40,
            (ProjectileKind::Ricochet, false) => 30,
            (ProjectileKind::Ricochet, true) => 35,
            (ProjectileKind::Sniper, false) => 50,
            (ProjectileKind::Sniper, true) => 60,
            (ProjectileKind::Shield, false) => 20,
            (ProjectileKind::Shield, true) => 25,
        };
        Some(dmg)
    }

    /// Collision body size in pixels.
    pub fn size(&self) -> Vec2 {
        match self {
            ProjectileKind::Shell => Vec2::new(14.0, 14.0),
            ProjectileKind::Bomb => Vec2::new(20.0, 20.0),
            ProjectileKind::Ricochet => Vec2::new(12.0, 12.0),
            ProjectileKind::Sniper => Vec2::new(20.0, 6.0),
            ProjectileKind::Shield => Vec2::new(10.0, 10.0),
        }
    }
}

/// Supply-drop contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxKind {
    Ammo,
    Health,
    Ghost,
    Explosive,
}

/// Top-level match state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Active,
    Complete,
}
