use bitflags::bitflags;
use glam::Vec2;
use smallvec::SmallVec;

use crate::map::collision::Rect;

bitflags! {
    /// Flip flags carried in the upper bits of a tile id. They affect how a
    /// tile is drawn, never whether it is solid, so collision and rendering
    /// both mask them off before inspecting the id.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileFlip: u32 {
        const HORIZONTAL = 0x8000_0000;
        const VERTICAL = 0x4000_0000;
        const DIAGONAL = 0x2000_0000;
    }
}

/// Tile layers that participate in collision, by name.
pub const COLLIDABLE_LAYERS: [&str; 3] = ["platform", "bridge", "uw_plant"];

pub fn is_collidable_layer(name: &str) -> bool {
    COLLIDABLE_LAYERS.contains(&name)
}

/// What a layer holds. Marker layers carry spawn points and the like; only
/// tile layers carry a tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Tiles,
    Markers,
}

/// A single named layer of the map. `gids` is row-major, one id per cell,
/// with zero meaning "no tile". Ids may carry [`TileFlip`] bits.
#[derive(Debug, Clone)]
pub struct TileLayer {
    pub name: String,
    pub kind: LayerKind,
    pub visible: bool,
    pub gids: Vec<u32>,
}

impl TileLayer {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            kind: LayerKind::Tiles,
            visible: true,
            gids: vec![0; (width * height) as usize],
        }
    }

    /// Whether the layer holds any tiles at all.
    pub fn is_empty(&self) -> bool {
        self.gids.iter().all(|&gid| gid & !TileFlip::all().bits() == 0)
    }
}

/// The tile grid the simulation collides against. Owned by the map loader
/// and read-only to every system.
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Map size, in tiles.
    pub width: u32,
    pub height: u32,
    /// Tile size, in world units.
    pub tile_width: u32,
    pub tile_height: u32,
    /// Layers in map order. Scan order over these decides which tile "wins"
    /// a collision query.
    pub layers: SmallVec<[TileLayer; 4]>,
}

impl TileGrid {
    /// Total map size in world units.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            (self.width * self.tile_width) as f32,
            (self.height * self.tile_height) as f32,
        )
    }

    /// World-space bounds of the tile at (col, row).
    pub fn tile_rect(&self, col: u32, row: u32) -> Rect {
        Rect::new(
            (col * self.tile_width) as f32,
            (row * self.tile_height) as f32,
            self.tile_width as f32,
            self.tile_height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_bits_do_not_overlap_ids() {
        // All three flip bits sit above any realistic tile id
        assert_eq!(TileFlip::all().bits(), 0xE000_0000);
        assert_eq!(5 & !TileFlip::all().bits(), 5);
        assert_eq!((5 | TileFlip::HORIZONTAL.bits()) & !TileFlip::all().bits(), 5);
    }

    #[test]
    fn test_collidable_layer_names() {
        assert!(is_collidable_layer("platform"));
        assert!(is_collidable_layer("bridge"));
        assert!(is_collidable_layer("uw_plant"));
        assert!(!is_collidable_layer("background"));
        assert!(!is_collidable_layer(""));
    }

    #[test]
    fn test_tile_rect() {
        let grid = TileGrid {
            width: 4,
            height: 4,
            tile_width: 32,
            tile_height: 16,
            layers: SmallVec::new(),
        };
        let rect = grid.tile_rect(2, 3);
        assert_eq!(rect, Rect::new(64.0, 48.0, 32.0, 16.0));
        assert_eq!(grid.pixel_size(), Vec2::new(128.0, 64.0));
    }
}
