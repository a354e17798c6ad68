//! Tile collision queries against the map's collidable layers.

use crate::map::grid::{is_collidable_layer, LayerKind, TileFlip, TileGrid};

/// An axis-aligned box in world units, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Positive-area overlap on both axes. Boxes that merely share an edge
    /// do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Returns the bounds of the first solid tile intersecting `rect`.
///
/// Layers are scanned in map order, tiles row-major within a layer, and the
/// first hit is returned. When a box straddles several tiles this scan order
/// is what decides the winner; callers may rely on getting *a* colliding
/// tile, never the closest one.
pub fn find_solid_tile(grid: &TileGrid, rect: Rect) -> Option<Rect> {
    for layer in &grid.layers {
        if !layer.visible || layer.kind != LayerKind::Tiles || !is_collidable_layer(&layer.name) {
            continue;
        }
        for row in 0..grid.height {
            for col in 0..grid.width {
                let gid = layer.gids[(row * grid.width + col) as usize] & !TileFlip::all().bits();
                if gid == 0 {
                    continue;
                }
                let tile = grid.tile_rect(col, row);
                if rect.intersects(&tile) {
                    return Some(tile);
                }
            }
        }
    }
    None
}
