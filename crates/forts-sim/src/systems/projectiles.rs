//! Projectile stepping: integration, collision resolution, damage.
//!
//! Every kind integrates one step (`vel.y += gravity; pos += vel`) and
//! then resolves collisions in a fixed order — terrain, ghosts, players,
//! stage bounds — where the first terminal hit ends the frame for that
//! projectile. The live projectile list is snapshotted up front so tile
//! and entity removal mid-sweep cannot invalidate the iteration.

use glam::Vec2;
use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use forts_core::components::{Body, GhostState, PlayerState, Position, ProjectileState, Velocity};
use forts_core::constants::*;
use forts_core::enums::{ProjectileKind, TileKind};
use forts_core::events::SimEvent;
use forts_core::stats::MatchStats;
use forts_core::types::{Aabb, CellPos};
use forts_terrain::TileGrid;

/// Outcome of one projectile's frame.
enum Step {
    Alive,
    Dead,
}

/// Advance every projectile one tick.
pub fn run(
    world: &mut World,
    grid: &mut TileGrid,
    rng: &mut ChaCha8Rng,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
) {
    let shots: Vec<(Entity, ProjectileState, Vec2, Vec2, Vec2)> = world
        .query::<(&ProjectileState, &Position, &Velocity, &Body)>()
        .iter()
        .map(|(entity, (state, pos, vel, body))| (entity, *state, pos.0, vel.0, body.size))
        .collect();

    for (entity, mut state, mut pos, mut vel, size) in shots {
        let outcome = match state.kind {
            ProjectileKind::Shell => {
                step_shell(world, grid, stats, events, &mut state, &mut pos, &mut vel, size)
            }
            ProjectileKind::Bomb => step_bomb(
                world, grid, rng, stats, events, &mut state, &mut pos, &mut vel, size,
            ),
            ProjectileKind::Ricochet => step_ricochet(
                world, grid, stats, events, &mut state, &mut pos, &mut vel, size,
            ),
            ProjectileKind::Sniper | ProjectileKind::Shield => step_piercer(
                world, grid, stats, events, &mut state, &mut pos, &mut vel, size,
            ),
        };

        match outcome {
            Step::Dead => {
                let _ = world.despawn(entity);
            }
            Step::Alive => {
                if let Ok((p, v, s)) = world
                    .query_one_mut::<(&mut Position, &mut Velocity, &mut ProjectileState)>(entity)
                {
                    p.0 = pos;
                    v.0 = vel;
                    *s = state;
                }
            }
        }
    }
}

/// Spend the one pierce an explosive shot carries, if still available.
fn try_pierce(state: &mut ProjectileState) -> bool {
    if state.explosive && !state.has_pierced {
        state.has_pierced = true;
        true
    } else {
        false
    }
}

/// Plain cannonball. Stone shatters on impact, ground just stops the
/// shot, and cannon tiles are no obstacle at all.
fn step_shell(
    world: &mut World,
    grid: &mut TileGrid,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
    state: &mut ProjectileState,
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
) -> Step {
    vel.y += state.kind.gravity();
    *pos += *vel;
    let rect = Aabb::from_center_size(*pos, size);

    for (cell, kind) in grid.overlapping(&rect) {
        match kind {
            TileKind::Stone => {
                grid.remove(cell);
                if try_pierce(state) {
                    continue;
                }
                return Step::Dead;
            }
            TileKind::Ground => {
                if try_pierce(state) {
                    continue;
                }
                return Step::Dead;
            }
            _ => {}
        }
    }

    if strike_ghosts(world, rect, state, true, stats, events) {
        return Step::Dead;
    }
    if strike_players(world, rect, state.kind.damage(state.explosive), state, true, stats, events)
    {
        return Step::Dead;
    }
    if falls_offstage(&rect) {
        return Step::Dead;
    }
    Step::Alive
}

/// Sniper rounds and shield pellets: every tile stops them (shattering
/// stone on the way), and the sniper round also dies leaving the top of
/// the stage.
fn step_piercer(
    world: &mut World,
    grid: &mut TileGrid,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
    state: &mut ProjectileState,
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
) -> Step {
    vel.y += state.kind.gravity();
    *pos += *vel;
    let rect = Aabb::from_center_size(*pos, size);

    for (cell, kind) in grid.overlapping(&rect) {
        if kind == TileKind::Stone {
            grid.remove(cell);
        }
        if try_pierce(state) {
            continue;
        }
        return Step::Dead;
    }

    if strike_ghosts(world, rect, state, true, stats, events) {
        return Step::Dead;
    }
    if strike_players(world, rect, state.kind.damage(state.explosive), state, true, stats, events)
    {
        return Step::Dead;
    }

    let out = if state.kind == ProjectileKind::Sniper {
        rect.top() < -OFFSTAGE_MARGIN || rect.bottom() > STAGE_HEIGHT + OFFSTAGE_MARGIN
    } else {
        false
    };
    if out || falls_offstage(&rect) {
        return Step::Dead;
    }
    Step::Alive
}

/// Heavy bomb: detonates on the first tile it touches. A stone center
/// takes up to three neighboring stones with it; players near the blast
/// take falloff damage. Ghosts are beneath its notice.
fn step_bomb(
    world: &mut World,
    grid: &mut TileGrid,
    rng: &mut ChaCha8Rng,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
    state: &mut ProjectileState,
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
) -> Step {
    vel.y += state.kind.gravity();
    *pos += *vel;
    let rect = Aabb::from_center_size(*pos, size);

    if let Some(&(cell, kind)) = grid.overlapping(&rect).first() {
        let mut destroyed = 0u32;
        if kind == TileKind::Stone {
            grid.remove(cell);
            destroyed += 1;

            let mut neighbors: Vec<CellPos> = Vec::new();
            for row in cell.row - 1..=cell.row + 1 {
                for col in cell.col - 1..=cell.col + 1 {
                    let neighbor = CellPos::new(col, row);
                    if neighbor == cell {
                        continue;
                    }
                    if grid.get(neighbor) == Some(TileKind::Stone) {
                        neighbors.push(neighbor);
                    }
                }
            }
            let take = rng.gen_range(0..=neighbors.len().min(BOMB_MAX_NEIGHBOR_STONES));
            let picked: Vec<CellPos> = neighbors.choose_multiple(rng, take).copied().collect();
            for neighbor in picked {
                grid.remove(neighbor);
                destroyed += 1;
            }
        }

        let radius = if state.explosive {
            BOMB_BLAST_RADIUS_EXPLOSIVE
        } else {
            BOMB_BLAST_RADIUS
        };
        let base = state.kind.damage(state.explosive);
        let center = rect.center();
        for (_entity, (ppos, pstate)) in world.query_mut::<(&Position, &mut PlayerState)>() {
            if pstate.id == state.owner {
                continue;
            }
            let dist = ppos.0.distance(center);
            if dist < radius {
                let damage = (base as f32 * (1.0 - dist / radius)) as i32;
                pstate.hp -= damage;
                stats.record_hit(state.owner, damage);
                events.push(SimEvent::PlayerHit {
                    player: pstate.id,
                    damage,
                });
            }
        }

        events.push(SimEvent::BombExploded {
            x: center.x,
            y: center.y,
            stones_destroyed: destroyed,
        });

        if !try_pierce(state) {
            return Step::Dead;
        }
    }

    if strike_players(world, rect, state.kind.damage(state.explosive), state, true, stats, events)
    {
        return Step::Dead;
    }
    if falls_offstage(&rect) {
        return Step::Dead;
    }
    Step::Alive
}

/// Ricochet round: reflects off the stage sides and off tiles until its
/// bounce budget runs dry, after which the next tile contact is terminal
/// (modulo the explosive pierce). Ghost and player hits always connect.
fn step_ricochet(
    world: &mut World,
    grid: &mut TileGrid,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
    state: &mut ProjectileState,
    pos: &mut Vec2,
    vel: &mut Vec2,
    size: Vec2,
) -> Step {
    vel.y += state.kind.gravity();
    *pos += *vel;
    let half = size * 0.5;

    // Stage side walls count against the bounce budget too.
    if pos.x - half.x < 0.0 {
        pos.x = half.x;
        vel.x = -vel.x;
        state.bounces_left -= 1;
    } else if pos.x + half.x > STAGE_WIDTH {
        pos.x = STAGE_WIDTH - half.x;
        vel.x = -vel.x;
        state.bounces_left -= 1;
    }

    loop {
        let rect = Aabb::from_center_size(*pos, size);
        let Some(&(cell, kind)) = grid.overlapping(&rect).first() else {
            break;
        };
        let delta = *pos - cell.center();

        if state.bounces_left <= 0 {
            if kind == TileKind::Stone {
                grid.remove(cell);
            }
            if try_pierce(state) {
                // Shove through along the dominant axis and keep flying.
                if delta.x.abs() > delta.y.abs() {
                    pos.x += vel.x * 2.0;
                } else {
                    pos.y += vel.y * 2.0;
                }
                continue;
            }
            return Step::Dead;
        }

        // Reflect the axis with the larger penetration offset.
        if delta.x.abs() > delta.y.abs() {
            vel.x = -vel.x;
            pos.x += vel.x * 2.0;
        } else {
            vel.y = -vel.y;
            pos.y += vel.y * 2.0;
        }
        state.bounces_left -= 1;
        break;
    }

    let rect = Aabb::from_center_size(*pos, size);
    if strike_ghosts(world, rect, state, false, stats, events) {
        return Step::Dead;
    }
    if strike_players(
        world,
        rect,
        state.kind.damage(state.explosive),
        state,
        false,
        stats,
        events,
    ) {
        return Step::Dead;
    }

    if state.bounces_left < -1 || rect.top() > STAGE_HEIGHT + OFFSTAGE_MARGIN {
        return Step::Dead;
    }
    Step::Alive
}

/// Sweep the live ghosts. Returns true when the hit is terminal for the
/// projectile. Kill credit goes to the owner when the damage call
/// reports the ghost died.
fn strike_ghosts(
    world: &mut World,
    rect: Aabb,
    state: &mut ProjectileState,
    allow_pierce: bool,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
) -> bool {
    let Some(damage) = state.kind.ghost_damage(state.explosive) else {
        return false;
    };

    let mut terminal = false;
    for (_entity, (gpos, gstate, gbody)) in
        world.query_mut::<(&Position, &mut GhostState, &Body)>()
    {
        if gstate.hp <= 0 {
            continue;
        }
        if !rect.overlaps(&gbody.aabb_at(gpos.0)) {
            continue;
        }
        gstate.hp -= damage;
        if gstate.hp <= 0 {
            stats.tally_mut(state.owner).ghosts_killed += 1;
            events.push(SimEvent::GhostKilled {
                player: state.owner,
            });
        }
        if allow_pierce && try_pierce(state) {
            continue;
        }
        terminal = true;
        break;
    }

    reap_dead_ghosts(world);
    terminal
}

/// Sweep the opposing players. Returns true when the hit is terminal.
fn strike_players(
    world: &mut World,
    rect: Aabb,
    damage: i32,
    state: &mut ProjectileState,
    allow_pierce: bool,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
) -> bool {
    for (_entity, (ppos, pstate, pbody)) in
        world.query_mut::<(&Position, &mut PlayerState, &Body)>()
    {
        if pstate.id == state.owner {
            continue;
        }
        if !rect.overlaps(&pbody.aabb_at(ppos.0)) {
            continue;
        }
        pstate.hp -= damage;
        stats.record_hit(state.owner, damage);
        events.push(SimEvent::PlayerHit {
            player: pstate.id,
            damage,
        });
        if allow_pierce && try_pierce(state) {
            continue;
        }
        return true;
    }
    false
}

/// Remove ghosts whose hp dropped to zero this sweep.
fn reap_dead_ghosts(world: &mut World) {
    let dead: Vec<Entity> = world
        .query::<&GhostState>()
        .iter()
        .filter(|(_, g)| g.hp <= 0)
        .map(|(entity, _)| entity)
        .collect();
    for entity in dead {
        let _ = world.despawn(entity);
    }
}

/// Past the side margins or fallen below the stage.
fn falls_offstage(rect: &Aabb) -> bool {
    rect.left() < -OFFSTAGE_MARGIN
        || rect.right() > STAGE_WIDTH + OFFSTAGE_MARGIN
        || rect.top() > STAGE_HEIGHT + OFFSTAGE_MARGIN
}
