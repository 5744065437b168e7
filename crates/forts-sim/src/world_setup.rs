//! Entity spawn factories for setting up and running a match.
//!
//! Creates the two combatants, the supply airship, and the transient
//! entities (projectiles, ghosts, item boxes) with their component
//! bundles.

use glam::Vec2;
use hecs::World;

use forts_core::components::*;
use forts_core::constants::*;
use forts_core::enums::{BoxKind, PlayerId, ProjectileKind};
use forts_core::types::aim_vector;

/// Set up the initial match world: both players and the airship.
pub fn setup_match(world: &mut World) {
    spawn_player(world, PlayerId::One);
    spawn_player(world, PlayerId::Two);
    spawn_airship(world);
}

/// Spawn a combatant at their side's fixed spawn point.
pub fn spawn_player(world: &mut World, id: PlayerId) -> hecs::Entity {
    let (x, y) = match id {
        PlayerId::One => PLAYER_ONE_SPAWN,
        PlayerId::Two => PLAYER_TWO_SPAWN,
    };
    world.spawn((
        PlayerState::new(id),
        Position(Vec2::new(x, y)),
        Velocity(Vec2::ZERO),
        Body::new(PLAYER_WIDTH, PLAYER_HEIGHT),
    ))
}

/// Spawn the supply airship at its patrol altitude.
pub fn spawn_airship(world: &mut World) -> hecs::Entity {
    world.spawn((
        AirshipState {
            direction: 1.0,
            last_drop_tick: 0,
        },
        Position(Vec2::new(STAGE_WIDTH * 0.5, AIRSHIP_ALTITUDE)),
        Body::new(AIRSHIP_WIDTH, AIRSHIP_HEIGHT),
    ))
}

/// Spawn one projectile leaving a muzzle.
pub fn spawn_projectile(
    world: &mut World,
    kind: ProjectileKind,
    at: Vec2,
    angle_deg: f32,
    owner: PlayerId,
    explosive: bool,
) -> hecs::Entity {
    let bounces_left = match kind {
        ProjectileKind::Ricochet => RICOCHET_BOUNCES,
        _ => 0,
    };
    let size = kind.size();
    world.spawn((
        ProjectileState {
            kind,
            owner,
            explosive,
            has_pierced: false,
            bounces_left,
        },
        Position(at),
        Velocity(aim_vector(angle_deg) * kind.launch_speed()),
        Body { size },
    ))
}

/// Spawn a ghost at the top of the stage above `x`, homing on `target`.
pub fn spawn_ghost(
    world: &mut World,
    x: f32,
    target: PlayerId,
    owner: PlayerId,
) -> hecs::Entity {
    world.spawn((
        GhostState {
            owner,
            target,
            hp: GHOST_HP,
        },
        Position(Vec2::new(x, 0.0)),
        Body::new(GHOST_WIDTH, GHOST_HEIGHT),
    ))
}

/// Spawn a supply box in free fall.
pub fn spawn_item_box(world: &mut World, at: Vec2, kind: BoxKind) -> hecs::Entity {
    world.spawn((
        ItemBoxState { kind },
        Position(at),
        Velocity(Vec2::ZERO),
        Body::new(BOX_SIZE, BOX_SIZE),
    ))
}
