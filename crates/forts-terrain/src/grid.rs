//! TileGrid: cell-keyed destructible terrain with a cannon index.

use std::collections::BTreeMap;

use glam::Vec2;

use forts_core::enums::TileKind;
use forts_core::types::{Aabb, CellPos};

/// All placed tiles, keyed by grid cell.
///
/// Cannons are dual-registered in an insertion-ordered index so
/// nearest-cannon lookups stay cheap and deterministic. A `BTreeMap`
/// keeps plain iteration (snapshots, saves) deterministic as well.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
    tiles: BTreeMap<CellPos, TileKind>,
    cannons: Vec<CellPos>,
}

impl TileGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a tile. Rejected (returns false) when the cell is occupied;
    /// the caller must remove the old tile first to replace it.
    pub fn place(&mut self, cell: CellPos, kind: TileKind) -> bool {
        if self.tiles.contains_key(&cell) {
            return false;
        }
        self.tiles.insert(cell, kind);
        if kind.is_cannon() {
            self.cannons.push(cell);
        }
        true
    }

    /// Remove the tile at `cell`, clearing the cannon index entry too.
    pub fn remove(&mut self, cell: CellPos) -> Option<TileKind> {
        let kind = self.tiles.remove(&cell)?;
        if kind.is_cannon() {
            self.cannons.retain(|c| *c != cell);
        }
        Some(kind)
    }

    pub fn get(&self, cell: CellPos) -> Option<TileKind> {
        self.tiles.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in cell order.
    pub fn iter(&self) -> impl Iterator<Item = (CellPos, TileKind)> + '_ {
        self.tiles.iter().map(|(cell, kind)| (*cell, *kind))
    }

    /// Cannon cells in insertion order.
    pub fn cannons(&self) -> &[CellPos] {
        &self.cannons
    }

    /// Number of tiles of one kind (handy for tests and match setup).
    pub fn count_of(&self, kind: TileKind) -> usize {
        self.tiles.values().filter(|k| **k == kind).count()
    }

    /// All tiles strictly overlapping `rect`, in cell order.
    ///
    /// Probes only the cells the rect covers rather than scanning every
    /// tile; every moving entity calls this each tick.
    pub fn overlapping(&self, rect: &Aabb) -> Vec<(CellPos, TileKind)> {
        let size = forts_core::constants::TILE_SIZE;
        let col_min = (rect.left() / size).floor() as i32;
        let col_max = (rect.right() / size).ceil() as i32 - 1;
        let row_min = (rect.top() / size).floor() as i32;
        let row_max = (rect.bottom() / size).ceil() as i32 - 1;

        let mut hits = Vec::new();
        for row in row_min..=row_max {
            for col in col_min..=col_max {
                let cell = CellPos::new(col, row);
                if let Some(kind) = self.get(cell) {
                    hits.push((cell, kind));
                }
            }
        }
        hits
    }

    /// First cannon within `radius` of `point`, in insertion order.
    pub fn nearest_cannon(&self, point: Vec2, radius: f32) -> Option<CellPos> {
        self.cannons
            .iter()
            .find(|cell| cell.center().distance(point) < radius)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(col: i32, row: i32) -> CellPos {
        CellPos::new(col, row)
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut grid = TileGrid::new();
        assert!(grid.place(cell(2, 3), TileKind::Ground));
        assert!(!grid.place(cell(2, 3), TileKind::Stone));
        assert_eq!(grid.get(cell(2, 3)), Some(TileKind::Ground));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_replace_requires_explicit_remove() {
        let mut grid = TileGrid::new();
        grid.place(cell(0, 0), TileKind::Ground);
        assert_eq!(grid.remove(cell(0, 0)), Some(TileKind::Ground));
        assert!(grid.place(cell(0, 0), TileKind::Stone));
        assert_eq!(grid.get(cell(0, 0)), Some(TileKind::Stone));
    }

    #[test]
    fn test_cannon_index_tracks_place_and_remove() {
        let mut grid = TileGrid::new();
        grid.place(cell(1, 1), TileKind::CannonNormal);
        grid.place(cell(5, 1), TileKind::CannonBomb);
        grid.place(cell(3, 1), TileKind::Stone);
        assert_eq!(grid.cannons(), &[cell(1, 1), cell(5, 1)]);

        grid.remove(cell(1, 1));
        assert_eq!(grid.cannons(), &[cell(5, 1)]);
        // Removing terrain leaves the index alone.
        grid.remove(cell(3, 1));
        assert_eq!(grid.cannons(), &[cell(5, 1)]);
    }

    #[test]
    fn test_overlapping_probes_covered_cells_only() {
        let mut grid = TileGrid::new();
        grid.place(cell(0, 0), TileKind::Ground);
        grid.place(cell(1, 0), TileKind::Stone);
        grid.place(cell(5, 5), TileKind::Ground);

        // A rect inside cell (0,0) only.
        let rect = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(35.0, 35.0));
        assert_eq!(grid.overlapping(&rect), vec![(cell(0, 0), TileKind::Ground)]);

        // Spanning the boundary picks up both cells.
        let rect = Aabb::new(Vec2::new(30.0, 5.0), Vec2::new(50.0, 35.0));
        assert_eq!(
            grid.overlapping(&rect),
            vec![
                (cell(0, 0), TileKind::Ground),
                (cell(1, 0), TileKind::Stone)
            ]
        );

        // Touching the shared edge exactly hits only the right cell.
        let rect = Aabb::new(Vec2::new(40.0, 0.0), Vec2::new(60.0, 30.0));
        assert_eq!(grid.overlapping(&rect), vec![(cell(1, 0), TileKind::Stone)]);
    }

    #[test]
    fn test_nearest_cannon_insertion_order_and_radius() {
        let mut grid = TileGrid::new();
        grid.place(cell(0, 0), TileKind::CannonNormal);
        grid.place(cell(1, 0), TileKind::CannonTriple);

        // Both are in range of a point between them; insertion order wins.
        let between = Vec2::new(40.0, 20.0);
        assert_eq!(
            grid.nearest_cannon(between, 48.0),
            Some(cell(0, 0)),
            "first-inserted cannon should win"
        );

        // Far away: nothing in range.
        assert_eq!(grid.nearest_cannon(Vec2::new(500.0, 500.0), 48.0), None);
    }
}
