//! Supply box fall, landing, and pickup.

use glam::Vec2;
use hecs::{Entity, World};

use forts_core::components::{Body, ItemBoxState, PlayerState, Position, Velocity};
use forts_core::constants::*;
use forts_core::enums::{BoxKind, PlayerId, TileKind};
use forts_core::events::SimEvent;
use forts_core::stats::MatchStats;
use forts_core::types::Aabb;
use forts_terrain::TileGrid;

use crate::world_setup;

/// Advance every falling box one tick.
pub fn run(
    world: &mut World,
    grid: &TileGrid,
    stats: &mut MatchStats,
    events: &mut Vec<SimEvent>,
) {
    let boxes: Vec<(Entity, BoxKind, Vec2, Vec2, Vec2)> = world
        .query::<(&ItemBoxState, &Position, &Velocity, &Body)>()
        .iter()
        .map(|(entity, (state, pos, vel, body))| (entity, state.kind, pos.0, vel.0, body.size))
        .collect();

    for (entity, kind, mut pos, mut vel, size) in boxes {
        vel.y = (vel.y + BOX_GRAVITY).min(BOX_TERMINAL_VELOCITY);
        pos.y += vel.y;

        // Rest atop the first solid terrain tile; cannons give no footing.
        let mut rect = Aabb::from_center_size(pos, size);
        for (cell, tile) in grid.overlapping(&rect) {
            if matches!(tile, TileKind::Ground | TileKind::Stone) {
                pos.y = cell.rect().top() - size.y * 0.5;
                vel.y = 0.0;
                rect = Aabb::from_center_size(pos, size);
                break;
            }
        }

        let mut collected: Option<(PlayerId, f32)> = None;
        for (_pentity, (ppos, pstate, pbody)) in
            world.query_mut::<(&Position, &mut PlayerState, &Body)>()
        {
            if !rect.overlaps(&pbody.aabb_at(ppos.0)) {
                continue;
            }
            match kind {
                BoxKind::Ammo => pstate.ammo += BOX_AMMO_REFILL,
                BoxKind::Health => pstate.hp = (pstate.hp + BOX_HEALTH_REFILL).min(PLAYER_MAX_HP),
                BoxKind::Explosive => pstate.explosive_charges = EXPLOSIVE_CHARGES_PER_PICKUP,
                BoxKind::Ghost => {}
            }
            collected = Some((pstate.id, ppos.0.x));
            break;
        }

        if let Some((player, player_x)) = collected {
            stats.tally_mut(player).boxes_collected += 1;
            events.push(SimEvent::BoxCollected { player, kind });
            if kind == BoxKind::Ghost {
                let target = player.opponent();
                world_setup::spawn_ghost(world, player_x, target, player);
                stats.tally_mut(player).ghosts_summoned += 1;
                events.push(SimEvent::GhostSummoned { player, target });
            }
            let _ = world.despawn(entity);
            continue;
        }

        if rect.top() > STAGE_HEIGHT {
            let _ = world.despawn(entity);
            continue;
        }

        if let Ok((p, v)) = world.query_one_mut::<(&mut Position, &mut Velocity)>(entity) {
            p.0 = pos;
            v.0 = vel;
        }
    }
}
