//! Snapshot builder — collects the visible world into a `MatchSnapshot`.

use hecs::World;

use forts_core::components::*;
use forts_core::enums::MatchPhase;
use forts_core::events::SimEvent;
use forts_core::state::*;
use forts_core::stats::MatchStats;
use forts_core::types::SimTime;
use forts_terrain::TileGrid;

/// Build the per-tick snapshot handed to the rendering collaborator.
pub fn build(
    world: &World,
    grid: &TileGrid,
    time: SimTime,
    phase: MatchPhase,
    stats: &MatchStats,
    events: Vec<SimEvent>,
) -> MatchSnapshot {
    let tiles = grid
        .iter()
        .map(|(cell, kind)| TileView { cell, kind })
        .collect();

    let mut players: Vec<PlayerView> = world
        .query::<(&PlayerState, &Position)>()
        .iter()
        .map(|(_entity, (state, pos))| {
            let cannon = state.occupied_cannon.and_then(|cell| {
                grid.get(cell).map(|kind| MannedCannonView {
                    cell,
                    kind,
                    aim_angle: state.aim_angle,
                })
            });
            PlayerView {
                id: state.id,
                position: pos.0,
                hp: state.hp,
                ammo: state.ammo,
                explosive_charges: state.explosive_charges,
                facing_right: state.facing_right,
                on_ground: state.on_ground,
                cannon,
            }
        })
        .collect();
    players.sort_by_key(|view| view.id.index());

    let projectiles = world
        .query::<(&ProjectileState, &Position, &Velocity)>()
        .iter()
        .map(|(_entity, (state, pos, vel))| ProjectileView {
            kind: state.kind,
            position: pos.0,
            velocity: vel.0,
            owner: state.owner,
            explosive: state.explosive,
        })
        .collect();

    let ghosts = world
        .query::<(&GhostState, &Position)>()
        .iter()
        .map(|(_entity, (state, pos))| GhostView {
            position: pos.0,
            hp: state.hp,
            owner: state.owner,
            target: state.target,
        })
        .collect();

    let boxes = world
        .query::<(&ItemBoxState, &Position)>()
        .iter()
        .map(|(_entity, (state, pos))| ItemBoxView {
            kind: state.kind,
            position: pos.0,
        })
        .collect();

    let airship = world
        .query::<(&AirshipState, &Position)>()
        .iter()
        .next()
        .map(|(_entity, (state, pos))| AirshipView {
            position: pos.0,
            direction: state.direction,
        });

    MatchSnapshot {
        time,
        phase,
        tiles,
        players,
        projectiles,
        ghosts,
        boxes,
        airship,
        stats: stats.clone(),
        events,
    }
}
