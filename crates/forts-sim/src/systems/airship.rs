//! Supply airship patrol and timed drops.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use forts_core::components::{AirshipState, Body, Position};
use forts_core::constants::*;
use forts_core::enums::BoxKind;
use forts_core::events::SimEvent;

use crate::world_setup;

/// Patrol and, on the drop timer, maybe release a supply box.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<SimEvent>, tick: u64) {
    let mut drop: Option<(Vec2, BoxKind)> = None;

    for (_entity, (pos, ship, body)) in
        world.query_mut::<(&mut Position, &mut AirshipState, &Body)>()
    {
        pos.0.x += AIRSHIP_SPEED * ship.direction;
        let rect = body.aabb_at(pos.0);
        if rect.right() > STAGE_WIDTH - AIRSHIP_TURN_MARGIN || rect.left() < AIRSHIP_TURN_MARGIN {
            ship.direction = -ship.direction;
        }

        let elapsed_ms = (tick - ship.last_drop_tick) as f64 * MS_PER_TICK;
        if elapsed_ms > AIRSHIP_DROP_INTERVAL_MS as f64 {
            ship.last_drop_tick = tick;
            // Most drop rolls release a box; the rest are skipped.
            if rng.gen_bool(AIRSHIP_DROP_CHANCE) {
                let kind = roll_box_kind(rng);
                drop = Some((Vec2::new(pos.0.x, rect.bottom() + BOX_DROP_OFFSET), kind));
            }
        }
    }

    if let Some((at, kind)) = drop {
        world_setup::spawn_item_box(world, at, kind);
        events.push(SimEvent::BoxDropped { kind });
    }
}

/// Weighted box kind: one roll against cumulative weights out of 100.
fn roll_box_kind(rng: &mut ChaCha8Rng) -> BoxKind {
    let roll = rng.gen_range(0..100u32);
    if roll < BOX_WEIGHT_AMMO {
        BoxKind::Ammo
    } else if roll < BOX_WEIGHT_AMMO + BOX_WEIGHT_HEALTH {
        BoxKind::Health
    } else if roll < BOX_WEIGHT_AMMO + BOX_WEIGHT_HEALTH + BOX_WEIGHT_GHOST {
        BoxKind::Ghost
    } else {
        BoxKind::Explosive
    }
}
