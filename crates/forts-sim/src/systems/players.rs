//! Player update and discrete action handlers.
//!
//! While on foot a player is a platformer body with axis-separated
//! collision against non-cannon tiles. While manning a cannon the body
//! is pinned to the emplacement and held up/down sweep the barrel.

use glam::Vec2;
use hecs::{Entity, World};

use forts_core::commands::HeldKeys;
use forts_core::components::{Body, PlayerState, Position, Velocity};
use forts_core::constants::*;
use forts_core::enums::{PlayerId, ProjectileKind, TileKind};
use forts_core::events::SimEvent;
use forts_core::stats::MatchStats;
use forts_core::types::{aim_vector, CellPos};
use forts_terrain::TileGrid;

use crate::world_setup;

/// Update both players in id order and report any deaths (hp gone, or
/// fallen past the stage bottom) in the order they were found.
pub fn run(world: &mut World, grid: &TileGrid, held: &[HeldKeys; 2]) -> Vec<PlayerId> {
    let mut players: Vec<(Entity, PlayerId)> = world
        .query::<&PlayerState>()
        .iter()
        .map(|(entity, state)| (entity, state.id))
        .collect();
    players.sort_by_key(|(_, id)| id.index());

    let mut deaths = Vec::new();
    for (entity, id) in players {
        update_one(world, grid, entity, held[id.index()]);

        if let Ok((state, pos, body)) =
            world.query_one_mut::<(&PlayerState, &Position, &Body)>(entity)
        {
            let top = pos.0.y - body.size.y * 0.5;
            if state.hp <= 0 || top > STAGE_HEIGHT {
                deaths.push(id);
            }
        }
    }
    deaths
}

fn update_one(world: &mut World, grid: &TileGrid, entity: Entity, held: HeldKeys) {
    let Ok((state, pos, vel, body)) =
        world.query_one_mut::<(&mut PlayerState, &mut Position, &mut Velocity, &Body)>(entity)
    else {
        return;
    };

    if let Some(cell) = state.occupied_cannon {
        if grid.get(cell).is_some_and(|k| k.is_cannon()) {
            pos.0 = cell.center();
            vel.0.y = 0.0;
            if held.up {
                state.aim_angle = (state.aim_angle + AIM_SWEEP_RATE).min(AIM_MAX_DEG);
            }
            if held.down {
                state.aim_angle = (state.aim_angle - AIM_SWEEP_RATE).max(AIM_MIN_DEG);
            }
            return;
        }
        // Emplacement is gone; back to being a platformer body.
        state.occupied_cannon = None;
    }

    let mut dx = 0.0;
    if held.left {
        dx = -PLAYER_SPEED;
        state.facing_right = false;
    }
    if held.right {
        dx = PLAYER_SPEED;
        state.facing_right = true;
    }
    if held.up && state.on_ground {
        vel.0.y = PLAYER_JUMP_VELOCITY;
        state.on_ground = false;
    }

    vel.0.y = (vel.0.y + PLAYER_GRAVITY).min(PLAYER_TERMINAL_VELOCITY);

    pos.0.x += dx;
    resolve_tiles(grid, body, &mut pos.0, &mut vel.0.y, &mut state.on_ground, dx, 0.0);
    pos.0.y += vel.0.y;
    state.on_ground = false;
    let dy = vel.0.y;
    resolve_tiles(grid, body, &mut pos.0, &mut vel.0.y, &mut state.on_ground, 0.0, dy);
}

/// Axis-separated push-out against solid tiles. Cannon tiles are
/// walk-through; they only matter for occupancy.
fn resolve_tiles(
    grid: &TileGrid,
    body: &Body,
    pos: &mut Vec2,
    vel_y: &mut f32,
    on_ground: &mut bool,
    dx: f32,
    dy: f32,
) {
    let half = body.size * 0.5;
    let candidates = grid.overlapping(&body.aabb_at(*pos));
    for (cell, kind) in candidates {
        if kind.is_cannon() {
            continue;
        }
        let tile = cell.rect();
        if !body.aabb_at(*pos).overlaps(&tile) {
            continue;
        }
        if dx > 0.0 {
            pos.x = tile.left() - half.x;
        }
        if dx < 0.0 {
            pos.x = tile.right() + half.x;
        }
        if dy > 0.0 {
            pos.y = tile.top() - half.y;
            *vel_y = 0.0;
            *on_ground = true;
        }
        if dy < 0.0 {
            pos.y = tile.bottom() + half.y;
            *vel_y = 0.0;
        }
    }
}

/// Enter the nearest cannon, or leave the current one with a sideways
/// eject and a small upward kick.
pub fn handle_toggle(
    world: &mut World,
    grid: &TileGrid,
    events: &mut Vec<SimEvent>,
    player: PlayerId,
) {
    let Some(entity) = find(world, player) else {
        return;
    };
    let Ok((state, pos, vel)) =
        world.query_one_mut::<(&mut PlayerState, &mut Position, &mut Velocity)>(entity)
    else {
        return;
    };

    if state.occupied_cannon.is_some() {
        let offset_x = state.aim_angle.to_radians().cos() * TILE_SIZE;
        pos.0.x += if offset_x.abs() > 10.0 {
            offset_x
        } else if state.aim_angle > 90.0 {
            -TILE_SIZE
        } else {
            TILE_SIZE
        };
        vel.0.y = CANNON_EXIT_KICK;
        state.occupied_cannon = None;
        events.push(SimEvent::CannonExited { player });
        return;
    }

    if !state.on_ground {
        return;
    }
    if let Some(cell) = grid.nearest_cannon(pos.0, CANNON_ENTER_RANGE) {
        state.occupied_cannon = Some(cell);
        state.aim_angle = AIM_ENTER_DEG;
        pos.0 = cell.center();
        if let Some(kind) = grid.get(cell) {
            events.push(SimEvent::CannonEntered { player, kind });
        }
    }
}

/// Fire the occupied cannon. Silently ignored outside a cannon, inside
/// the cooldown window, or without the ammo for the volley.
pub fn handle_fire(
    world: &mut World,
    grid: &TileGrid,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
    tick: u64,
    player: PlayerId,
) {
    let Some(entity) = find(world, player) else {
        return;
    };

    let (center, aim, cannon, explosive, cost) = {
        let Ok((state, pos)) = world.query_one_mut::<(&mut PlayerState, &Position)>(entity)
        else {
            return;
        };
        let Some(cell) = state.occupied_cannon else {
            return;
        };
        let Some(cannon) = grid.get(cell) else {
            return;
        };
        let Some(spec) = cannon.cannon_spec() else {
            return;
        };
        if let Some(last) = state.last_shot_tick {
            if (tick - last) as f64 * MS_PER_TICK <= spec.cooldown_ms as f64 {
                return;
            }
        }
        if state.ammo < spec.ammo_cost {
            return;
        }

        let explosive = state.explosive_charges > 0;
        if explosive {
            state.explosive_charges -= 1;
        }
        state.ammo -= spec.ammo_cost;
        state.last_shot_tick = Some(tick);
        (pos.0, state.aim_angle, cannon, explosive, spec.ammo_cost)
    };

    stats.tally_mut(player).shots_fired += cost as u32;

    let (kind, angles): (ProjectileKind, Vec<f32>) = match cannon {
        TileKind::CannonNormal => (ProjectileKind::Shell, vec![aim]),
        TileKind::CannonTriple => (ProjectileKind::Shell, vec![aim - 15.0, aim, aim + 15.0]),
        TileKind::CannonBomb => (ProjectileKind::Bomb, vec![aim]),
        TileKind::CannonRicochet => (ProjectileKind::Ricochet, vec![aim]),
        TileKind::CannonSniper => (ProjectileKind::Sniper, vec![aim]),
        // The radial burst ignores the barrel angle entirely.
        TileKind::CannonShield => (
            ProjectileKind::Shield,
            (0..8).map(|i| i as f32 * 45.0).collect(),
        ),
        TileKind::Ground | TileKind::Stone => return,
    };

    for angle in angles {
        let muzzle = center + aim_vector(angle) * MUZZLE_OFFSET;
        world_setup::spawn_projectile(world, kind, muzzle, angle, player, explosive);
    }
    events.push(SimEvent::ShotFired {
        player,
        kind,
        explosive,
    });
}

/// Drop a stone block into the cell under the player's feet while
/// airborne, landing on it. Rejected when grounded, manning a cannon,
/// out of ammo, at the stage floor, or when the cell is taken.
pub fn handle_place_block(
    world: &mut World,
    grid: &mut TileGrid,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
    player: PlayerId,
) {
    let Some(entity) = find(world, player) else {
        return;
    };
    let Ok((state, pos, vel, body)) =
        world.query_one_mut::<(&mut PlayerState, &mut Position, &mut Velocity, &Body)>(entity)
    else {
        return;
    };

    if state.occupied_cannon.is_some() || state.on_ground {
        return;
    }
    if state.ammo < 1 {
        return;
    }

    let half_h = body.size.y * 0.5;
    let feet = Vec2::new(pos.0.x, pos.0.y + half_h);
    let cell = CellPos::from_point(feet);
    if cell.origin().y >= STAGE_HEIGHT {
        return;
    }
    if !grid.place(cell, TileKind::Stone) {
        return;
    }

    state.ammo -= 1;
    stats.tally_mut(player).blocks_placed += 1;
    pos.0.y = cell.origin().y - half_h;
    vel.0.y = 0.0;
    events.push(SimEvent::BlockPlaced { player, cell });
}

fn find(world: &World, player: PlayerId) -> Option<Entity> {
    world
        .query::<&PlayerState>()
        .iter()
        .find(|(_, state)| state.id == player)
        .map(|(entity, _)| entity)
}
