//! Per-tick simulation systems, run in a fixed order:
//! airship, item boxes, projectiles, ghosts, players.

pub mod airship;
pub mod ghosts;
pub mod item_boxes;
pub mod players;
pub mod projectiles;
pub mod snapshot;
