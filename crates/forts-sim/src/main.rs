//! Headless match runner.
//!
//! Plays a scripted exhibition match (both players man their fort's
//! cannon and trade fire) and prints the final stats as JSON. Useful for
//! smoke-testing the full engine without a frontend.
//!
//! Usage: forts-sim [seed] [map_name]

use std::env;

use forts_core::commands::{HeldKeys, PlayerCommand};
use forts_core::enums::{MatchPhase, PlayerId};
use forts_sim::{MatchConfig, MatchEngine};

/// Give up after two minutes of simulated time.
const MAX_TICKS: u64 = 7200;

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| MatchConfig::default().seed);
    let map_name = args.next();

    let config = MatchConfig {
        seed,
        map_name,
        maps_dir: "maps".into(),
    };
    log::info!("starting match, seed {seed}");
    let mut engine = MatchEngine::new(&config);

    let mut snapshot = engine.tick();
    for tick in 1..MAX_TICKS {
        for command in script(tick) {
            engine.queue_command(command);
        }
        snapshot = engine.tick();

        if tick % 600 == 0 {
            let p1 = &snapshot.players[0];
            let p2 = &snapshot.players[1];
            log::info!(
                "t={:.0}s p1 hp={} ammo={} | p2 hp={} ammo={} | {} projectiles",
                snapshot.time.elapsed_secs,
                p1.hp,
                p1.ammo,
                p2.hp,
                p2.ammo,
                snapshot.projectiles.len(),
            );
        }
        if snapshot.phase == MatchPhase::Complete {
            break;
        }
    }

    match snapshot.stats.winner {
        Some(winner) => log::info!("match over, winner: {winner:?}"),
        None => log::info!("time limit reached with no winner"),
    }
    let stats = serde_json::to_string_pretty(&snapshot.stats).expect("stats serialize");
    println!("{stats}");
}

/// Scripted inputs: land, man the fort cannons, sweep barrels toward the
/// middle, then fire on every cooldown.
fn script(tick: u64) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    match tick {
        60 => {
            commands.push(PlayerCommand::ToggleCannon {
                player: PlayerId::One,
            });
            commands.push(PlayerCommand::ToggleCannon {
                player: PlayerId::Two,
            });
            // Sweep p1 down toward 45 deg and p2 up toward 135 deg.
            commands.push(PlayerCommand::SetHeld {
                player: PlayerId::One,
                held: HeldKeys {
                    down: true,
                    ..Default::default()
                },
            });
            commands.push(PlayerCommand::SetHeld {
                player: PlayerId::Two,
                held: HeldKeys {
                    up: true,
                    ..Default::default()
                },
            });
        }
        90 => {
            for player in PlayerId::BOTH {
                commands.push(PlayerCommand::SetHeld {
                    player,
                    held: HeldKeys::default(),
                });
            }
        }
        t if t >= 100 && t % 20 == 0 => {
            for player in PlayerId::BOTH {
                commands.push(PlayerCommand::Fire { player });
            }
        }
        _ => {}
    }
    commands
}
