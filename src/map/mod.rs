//! The level map: tile grid, spawn points, and collision queries.

pub mod collision;
pub mod grid;
pub mod parser;

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::constants::{RAW_LEVEL, TILE_SIZE};
use crate::error::ParseError;
use crate::map::collision::Rect;
use crate::map::grid::TileGrid;

/// Spawn coordinates read from the level's marker layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoints {
    pub player: Vec2,
    pub boss: Vec2,
}

/// The parsed level. Inserted as a resource at session start and borrowed
/// read-only by every system.
#[derive(Resource, Debug, Clone)]
pub struct Map {
    pub grid: TileGrid,
    pub spawn: SpawnPoints,
}

impl Map {
    /// Parses the built-in level.
    pub fn new() -> Result<Self, ParseError> {
        Self::from_level(&RAW_LEVEL, TILE_SIZE, TILE_SIZE)
    }

    /// Parses an arbitrary character-grid level.
    pub fn from_level(rows: &[&str], tile_width: u32, tile_height: u32) -> Result<Self, ParseError> {
        let (grid, spawn) = parser::parse_level(rows, tile_width, tile_height)?;
        Ok(Self { grid, spawn })
    }

    /// Total map size in world units.
    pub fn pixel_size(&self) -> Vec2 {
        self.grid.pixel_size()
    }

    /// First solid tile intersecting `rect`, if any. See
    /// [`collision::find_solid_tile`] for the scan-order contract.
    pub fn find_solid_tile(&self, rect: Rect) -> Option<Rect> {
        collision::find_solid_tile(&self.grid, rect)
    }
}
