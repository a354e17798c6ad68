//! Parses the character-grid level source into a [`TileGrid`] and spawn
//! points.

use glam::Vec2;
use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{DEFAULT_BOSS_SPAWN, DEFAULT_PLAYER_SPAWN};
use crate::error::ParseError;
use crate::map::grid::{TileGrid, TileLayer};
use crate::map::SpawnPoints;

/// Tile ids assigned per layer. Any non-zero id is solid; distinct ids keep
/// the layers tellable apart when rendering.
const PLATFORM_GID: u32 = 1;
const BRIDGE_GID: u32 = 2;
const PLANT_GID: u32 = 3;

pub fn parse_level(rows: &[&str], tile_width: u32, tile_height: u32) -> Result<(TileGrid, SpawnPoints), ParseError> {
    if rows.is_empty() {
        return Err(ParseError::EmptyLevel);
    }
    let width = rows[0].chars().count();
    let height = rows.len();

    let mut platform = TileLayer::new("platform", width as u32, height as u32);
    let mut bridge = TileLayer::new("bridge", width as u32, height as u32);
    let mut plant = TileLayer::new("uw_plant", width as u32, height as u32);

    let mut player_spawn = None;
    let mut boss_spawn = None;

    for (row, line) in rows.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(ParseError::InconsistentRowWidth {
                row,
                expected: width,
                found,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let index = row * width + col;
            let world = Vec2::new((col as u32 * tile_width) as f32, (row as u32 * tile_height) as f32);
            match ch {
                '#' => platform.gids[index] = PLATFORM_GID,
                '=' => bridge.gids[index] = BRIDGE_GID,
                'w' => plant.gids[index] = PLANT_GID,
                // First marker wins, matching object-group lookup order
                'P' => player_spawn = player_spawn.or(Some(world)),
                'B' => boss_spawn = boss_spawn.or(Some(world)),
                '.' | ' ' => {}
                other => return Err(ParseError::UnknownCharacter(other)),
            }
        }
    }

    let spawn = SpawnPoints {
        player: player_spawn.unwrap_or_else(|| {
            debug!("level has no player spawn marker, using default");
            Vec2::from(DEFAULT_PLAYER_SPAWN)
        }),
        boss: boss_spawn.unwrap_or_else(|| {
            debug!("level has no boss spawn marker, using default");
            Vec2::from(DEFAULT_BOSS_SPAWN)
        }),
    };

    let mut layers: SmallVec<[TileLayer; 4]> = SmallVec::new();
    layers.push(platform);
    layers.push(bridge);
    layers.push(plant);

    Ok((
        TileGrid {
            width: width as u32,
            height: height as u32,
            tile_width,
            tile_height,
            layers,
        },
        spawn,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::grid::is_collidable_layer;

    #[test]
    fn test_parse_dimensions_and_layers() {
        let rows = ["....", "P.B.", "####"];
        let (grid, _) = parse_level(&rows, 32, 32).unwrap();
        assert_eq!(grid.width, 4);
        assert_eq!(grid.height, 3);
        assert_eq!(grid.layers.len(), 3);
        assert!(grid.layers.iter().all(|l| is_collidable_layer(&l.name)));
    }

    #[test]
    fn test_parse_spawn_markers() {
        let rows = ["....", "P.B.", "####"];
        let (_, spawn) = parse_level(&rows, 32, 32).unwrap();
        assert_eq!(spawn.player, Vec2::new(0.0, 32.0));
        assert_eq!(spawn.boss, Vec2::new(64.0, 32.0));
    }

    #[test]
    fn test_parse_spawn_defaults() {
        let rows = ["....", "####"];
        let (_, spawn) = parse_level(&rows, 32, 32).unwrap();
        assert_eq!(spawn.player, Vec2::from(DEFAULT_PLAYER_SPAWN));
        assert_eq!(spawn.boss, Vec2::from(DEFAULT_BOSS_SPAWN));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let rows = ["..x.", "####"];
        assert_eq!(parse_level(&rows, 32, 32).unwrap_err(), ParseError::UnknownCharacter('x'));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let rows = ["....", "###"];
        assert_eq!(
            parse_level(&rows, 32, 32).unwrap_err(),
            ParseError::InconsistentRowWidth {
                row: 1,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_level() {
        assert_eq!(parse_level(&[], 32, 32).unwrap_err(), ParseError::EmptyLevel);
    }
}
