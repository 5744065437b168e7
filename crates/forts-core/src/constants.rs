//! Simulation constants and tuning parameters.
//!
//! Kinematic values are in pixels per tick (one physics step per frame).

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick, for cooldown bookkeeping.
pub const MS_PER_TICK: f64 = 1000.0 / TICK_RATE as f64;

// --- Stage ---

/// Stage width in pixels.
pub const STAGE_WIDTH: f32 = 1200.0;

/// Stage height in pixels.
pub const STAGE_HEIGHT: f32 = 700.0;

/// Grid cell size; all tile placement snaps to it.
pub const TILE_SIZE: f32 = 40.0;

/// Projectiles are culled this far beyond the stage edges.
pub const OFFSTAGE_MARGIN: f32 = 50.0;

// --- Player ---

/// Collision body width / height.
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 50.0;

/// Horizontal run speed.
pub const PLAYER_SPEED: f32 = 5.0;

/// Per-tick gravity while airborne.
pub const PLAYER_GRAVITY: f32 = 0.7;

/// Jump impulse (negative = up).
pub const PLAYER_JUMP_VELOCITY: f32 = -14.0;

/// Terminal fall speed.
pub const PLAYER_TERMINAL_VELOCITY: f32 = 15.0;

/// Hit points at spawn; healing clamps here.
pub const PLAYER_MAX_HP: i32 = 100;

/// Ammo at spawn.
pub const PLAYER_START_AMMO: i32 = 30;

/// Left player spawn (body center).
pub const PLAYER_ONE_SPAWN: (f32, f32) = (120.0, 325.0);

/// Right player spawn (body center).
pub const PLAYER_TWO_SPAWN: (f32, f32) = (STAGE_WIDTH - 120.0, 325.0);

// --- Cannons ---

/// A cannon can be entered from within this distance of its center.
pub const CANNON_ENTER_RANGE: f32 = TILE_SIZE * 1.2;

/// Upward kick applied when leaving a cannon.
pub const CANNON_EXIT_KICK: f32 = -8.0;

/// Barrel angle bounds in degrees.
pub const AIM_MIN_DEG: f32 = -30.0;
pub const AIM_MAX_DEG: f32 = 210.0;

/// Barrel sweep rate in degrees per tick.
pub const AIM_SWEEP_RATE: f32 = 1.5;

/// Barrel angle on entering a cannon.
pub const AIM_ENTER_DEG: f32 = 90.0;

/// Projectiles spawn this far from the cannon center along the barrel.
pub const MUZZLE_OFFSET: f32 = 50.0;

/// Explosive shots granted by one explosive pickup.
pub const EXPLOSIVE_CHARGES_PER_PICKUP: u32 = 5;

// --- Projectiles ---

/// Ricochet bounce budget (walls and tiles both consume it).
pub const RICOCHET_BOUNCES: i32 = 5;

/// Bomb blast radius, normal / explosive-charge shots.
pub const BOMB_BLAST_RADIUS: f32 = 60.0;
pub const BOMB_BLAST_RADIUS_EXPLOSIVE: f32 = 70.0;

/// Most stones one blast can remove (the hit stone plus sampled neighbors).
pub const BOMB_MAX_NEIGHBOR_STONES: usize = 3;

// --- Ghosts ---

pub const GHOST_HP: i32 = 30;
pub const GHOST_SPEED: f32 = 3.5;
pub const GHOST_CONTACT_DAMAGE: i32 = 20;

/// Upward drift when the ghost has no living target.
pub const GHOST_RISE_SPEED: f32 = 3.0;

pub const GHOST_WIDTH: f32 = 30.0;
pub const GHOST_HEIGHT: f32 = 35.0;

// --- Airship ---

pub const AIRSHIP_WIDTH: f32 = 100.0;
pub const AIRSHIP_HEIGHT: f32 = 50.0;

/// Patrol speed in pixels per tick.
pub const AIRSHIP_SPEED: f32 = 2.0;

/// Patrol reverses this far inside the stage edges.
pub const AIRSHIP_TURN_MARGIN: f32 = 30.0;

/// Patrol altitude (body center).
pub const AIRSHIP_ALTITUDE: f32 = 70.0;

/// Milliseconds between drop rolls.
pub const AIRSHIP_DROP_INTERVAL_MS: u64 = 5000;

/// Probability that a drop roll actually releases a box.
pub const AIRSHIP_DROP_CHANCE: f64 = 0.6;

/// Box kind weights out of 100: ammo / health / ghost / explosive.
pub const BOX_WEIGHT_AMMO: u32 = 40;
pub const BOX_WEIGHT_HEALTH: u32 = 35;
pub const BOX_WEIGHT_GHOST: u32 = 12;

// --- Item boxes ---

pub const BOX_SIZE: f32 = 30.0;
pub const BOX_GRAVITY: f32 = 0.4;
pub const BOX_TERMINAL_VELOCITY: f32 = 8.0;

/// Boxes spawn this far below the airship's hull.
pub const BOX_DROP_OFFSET: f32 = 10.0;

/// Ammo restored by an ammo box.
pub const BOX_AMMO_REFILL: i32 = 20;

/// HP restored by a health box (clamped at `PLAYER_MAX_HP`).
pub const BOX_HEALTH_REFILL: i32 = 25;
