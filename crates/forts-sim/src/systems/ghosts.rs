//! Ghost steering and contact resolution.
//!
//! A ghost flies at constant speed toward its target while the target
//! lives, deals its contact damage once, and drifts up off the stage
//! when there is nothing left to haunt.

use glam::Vec2;
use hecs::{Entity, World};

use forts_core::components::{Body, GhostState, PlayerState, Position};
use forts_core::constants::*;
use forts_core::events::SimEvent;
use forts_core::types::Aabb;

/// Advance every ghost one tick.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    let ghosts: Vec<(Entity, GhostState)> = world
        .query::<&GhostState>()
        .iter()
        .map(|(entity, state)| (entity, *state))
        .collect();

    for (entity, state) in ghosts {
        if state.hp <= 0 {
            let _ = world.despawn(entity);
            continue;
        }

        let (gpos, gsize) = {
            let Ok((pos, body)) = world.query_one_mut::<(&Position, &Body)>(entity) else {
                continue;
            };
            (pos.0, body.size)
        };

        // Target's pre-move body this tick (players update after ghosts).
        let mut target: Option<(Entity, Vec2, Aabb, i32)> = None;
        for (pentity, (ppos, pstate, pbody)) in
            world.query_mut::<(&Position, &PlayerState, &Body)>()
        {
            if pstate.id == state.target {
                target = Some((pentity, ppos.0, pbody.aabb_at(ppos.0), pstate.hp));
            }
        }

        let mut new_pos = gpos;
        let mut contact: Option<Entity> = None;
        match target {
            Some((pentity, pcenter, prect, php)) if php > 0 => {
                let delta = pcenter - gpos;
                let dist = delta.length();
                if dist > 0.0 {
                    new_pos += delta / dist * GHOST_SPEED;
                }
                if Aabb::from_center_size(new_pos, gsize).overlaps(&prect) {
                    contact = Some(pentity);
                }
            }
            _ => {
                new_pos.y -= GHOST_RISE_SPEED;
            }
        }

        if let Some(pentity) = contact {
            if let Ok(pstate) = world.query_one_mut::<&mut PlayerState>(pentity) {
                pstate.hp -= GHOST_CONTACT_DAMAGE;
                events.push(SimEvent::PlayerHit {
                    player: state.target,
                    damage: GHOST_CONTACT_DAMAGE,
                });
            }
            let _ = world.despawn(entity);
            continue;
        }

        if let Ok(pos) = world.query_one_mut::<&mut Position>(entity) {
            pos.0 = new_pos;
        }

        let rect = Aabb::from_center_size(new_pos, gsize);
        if rect.bottom() < -OFFSTAGE_MARGIN || rect.top() > STAGE_HEIGHT + OFFSTAGE_MARGIN {
            let _ = world.despawn(entity);
        }
    }
}
