//! Map file persistence and the built-in default layout.
//!
//! A map is a flat JSON array of `{x, y, type}` records, one per tile,
//! order independent. Pixel coordinates are the tile's top-left corner;
//! `type` is the tile-kind wire id (1-8, 0 = air and never persisted).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use forts_core::enums::TileKind;
use forts_core::types::CellPos;

use crate::grid::TileGrid;

/// Map file extension (without the dot).
pub const MAP_EXT: &str = "json";

/// One persisted tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TileRecord {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type")]
    pub type_id: u8,
}

/// Resolve a map name to its file path, appending `.json` when missing.
pub fn map_path(maps_dir: &Path, name: &str) -> PathBuf {
    let file = if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{name}.{MAP_EXT}")
    };
    maps_dir.join(file)
}

/// Names of all saved maps (file stems) in the maps directory.
pub fn map_list(maps_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(maps_dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MAP_EXT) {
                return None;
            }
            Some(path.file_stem()?.to_str()?.to_string())
        })
        .collect();
    names.sort();
    names
}

/// Serialize the grid to a map file.
pub fn save_map(grid: &TileGrid, path: &Path) -> io::Result<()> {
    let records: Vec<TileRecord> = grid
        .iter()
        .map(|(cell, kind)| {
            let origin = cell.origin();
            TileRecord {
                x: origin.x as i32,
                y: origin.y as i32,
                type_id: kind.type_id(),
            }
        })
        .collect();
    let json = serde_json::to_string(&records)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}

/// Load a grid from a map file.
///
/// Unknown type ids make the file malformed. Records landing in an
/// already-filled cell are dropped (one tile per cell).
pub fn load_map(path: &Path) -> io::Result<TileGrid> {
    let data = fs::read_to_string(path)?;
    let records: Vec<TileRecord> =
        serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut grid = TileGrid::new();
    for record in records {
        let kind = TileKind::from_type_id(record.type_id).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unknown tile type id {}", record.type_id),
            )
        })?;
        let cell = CellPos::from_point(Vec2::new(record.x as f32, record.y as f32));
        grid.place(cell, kind);
    }
    Ok(grid)
}

/// Load the named map, falling back to the default layout when the name
/// is absent or the file is missing or unreadable. Never fails.
pub fn load_or_default(maps_dir: &Path, name: Option<&str>) -> TileGrid {
    let Some(name) = name else {
        return default_map();
    };
    let path = map_path(maps_dir, name);
    match load_map(&path) {
        Ok(grid) => grid,
        Err(err) => {
            log::warn!(
                "map '{}' unavailable ({err}), using default layout",
                path.display()
            );
            default_map()
        }
    }
}

/// The built-in layout: a two-row floor, a fort with a cannon on each
/// side, and four more emplacements on raised platforms.
pub fn default_map() -> TileGrid {
    let mut grid = TileGrid::new();
    let mut place = |col: i32, row: i32, kind: TileKind| {
        grid.place(CellPos::new(col, row), kind);
    };

    // Floor: two full-width rows at the bottom of the stage.
    for col in 0..30 {
        place(col, 15, TileKind::Ground);
        place(col, 16, TileKind::Ground);
    }

    // Left fort with the starter cannon.
    for col in 0..3 {
        place(col, 14, TileKind::Ground);
    }
    for col in 0..2 {
        place(col, 13, TileKind::Stone);
    }
    place(2, 13, TileKind::CannonNormal);

    // Right fort, mirrored, with the triple cannon.
    for col in 27..30 {
        place(col, 14, TileKind::Ground);
    }
    for col in 28..30 {
        place(col, 13, TileKind::Stone);
    }
    place(27, 13, TileKind::CannonTriple);

    // Center platform with the sniper overlooking everything.
    for col in 13..18 {
        place(col, 12, TileKind::Stone);
    }
    place(15, 11, TileKind::CannonSniper);

    // Left tower: bomb cannon.
    for col in 5..8 {
        place(col, 10, TileKind::Stone);
    }
    place(6, 9, TileKind::CannonBomb);

    // Right tower: ricochet cannon.
    for col in 22..25 {
        place(col, 10, TileKind::Stone);
    }
    place(23, 9, TileKind::CannonRicochet);

    // Low center pedestal: shield cannon.
    for col in 14..17 {
        place(col, 14, TileKind::Stone);
    }
    place(15, 13, TileKind::CannonShield);

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("forts-map-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_default_map_layout() {
        let grid = default_map();
        // 60 floor tiles + 6 per fort + 6 center + 4 + 4 towers + 4 pedestal.
        assert_eq!(grid.len(), 84);
        assert_eq!(grid.cannons().len(), 6);
        // Starter cannon sits on the left fort.
        assert_eq!(grid.get(CellPos::new(2, 13)), Some(TileKind::CannonNormal));
        assert_eq!(grid.get(CellPos::new(27, 13)), Some(TileKind::CannonTriple));
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("arena.json");

        let grid = default_map();
        save_map(&grid, &path).unwrap();
        let loaded = load_map(&path).unwrap();

        assert_eq!(loaded.len(), grid.len());
        for (cell, kind) in grid.iter() {
            assert_eq!(loaded.get(cell), Some(kind));
        }
        assert_eq!(loaded.cannons().len(), grid.cannons().len());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_unknown_type_id() {
        let dir = scratch_dir("badtype");
        let path = dir.join("bad.json");
        fs::write(&path, r#"[{"x": 0, "y": 0, "type": 42}]"#).unwrap();

        let err = load_map(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = scratch_dir("badjson");
        let path = dir.join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = load_map(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_map_falls_back_to_default() {
        let dir = scratch_dir("fallback");
        let grid = load_or_default(&dir, Some("missing_map"));
        let default = default_map();

        assert_eq!(grid.len(), default.len());
        for (cell, kind) in default.iter() {
            assert_eq!(grid.get(cell), Some(kind));
        }
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_no_name_means_default() {
        let dir = scratch_dir("noname");
        let grid = load_or_default(&dir, None);
        assert_eq!(grid.len(), default_map().len());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_duplicate_records_keep_first() {
        let dir = scratch_dir("dupes");
        let path = dir.join("dupes.json");
        fs::write(
            &path,
            r#"[{"x": 40, "y": 40, "type": 2}, {"x": 40, "y": 40, "type": 1}]"#,
        )
        .unwrap();

        let grid = load_map(&path).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(CellPos::new(1, 1)), Some(TileKind::Stone));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_map_list_and_path() {
        let dir = scratch_dir("listing");
        save_map(&default_map(), &dir.join("alpha.json")).unwrap();
        save_map(&default_map(), &dir.join("beta.json")).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(map_list(&dir), vec!["alpha", "beta"]);
        assert_eq!(map_path(&dir, "alpha"), dir.join("alpha.json"));
        assert_eq!(map_path(&dir, "alpha.json"), dir.join("alpha.json"));
        fs::remove_dir_all(&dir).ok();
    }
}
