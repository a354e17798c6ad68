//! This module contains all the constants used in the game.

use std::time::Duration;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the game window, in pixels.
pub const DISPLAY_WIDTH: u32 = 1450;
pub const DISPLAY_HEIGHT: u32 = 850;

/// Side length of a map tile, in world units.
pub const TILE_SIZE: u32 = 32;

/// Extra zoom applied on top of fitting the map height into the window.
pub const CAMERA_ZOOM_PADDING: f32 = 1.5;

// Player physics
pub const MOVE_SPEED: f32 = 200.0;
pub const GRAVITY: f32 = 1200.0;
pub const JUMP_VELOCITY: f32 = -720.0;
pub const MAX_FALL_SPEED: f32 = 1000.0;
/// Clearance left between a resolved position and the tile it collided with,
/// so the same collision does not re-trigger next tick from rounding.
pub const COLLISION_EPSILON: f32 = 0.1;

pub const PLAYER_MAX_HEALTH: i32 = 2000;
/// Seconds between shots.
pub const SHOOT_COOLDOWN: f32 = 0.5;
/// Damage applied to the player on first contact with the boss.
pub const CONTACT_DAMAGE: i32 = 200;

// Player sprite sheet: fixed-size frames, one animation per row.
pub const PLAYER_FRAME_WIDTH: u32 = 50;
pub const PLAYER_FRAME_HEIGHT: u32 = 37;
/// Frames available in each row of the player sheet.
pub const PLAYER_FRAME_COUNTS: [usize; 8] = [4, 6, 10, 9, 10, 10, 7, 5];
/// Seconds per player animation frame.
pub const PLAYER_FRAME_TIME: f32 = 0.1;
/// The player is drawn this many tiles tall; the scale factor follows from it.
pub const PLAYER_HEIGHT_IN_TILES: f32 = 3.0;

// Boss
pub const BOSS_MAX_HEALTH: i32 = 10000;
/// Health thresholds separating the boss phases.
pub const BOSS_PHASE2_THRESHOLD: i32 = 5000;
pub const BOSS_PHASE3_THRESHOLD: i32 = 2000;

/// Boss skill sheets hold this many frames in a single row.
pub const BOSS_FRAME_COUNT: usize = 6;
pub const BOSS_FRAME_WIDTH: u32 = 96;
pub const BOSS_FRAME_HEIGHT: u32 = 96;
pub const BOSS_SCALE: f32 = 1.8;
/// Seconds per boss animation frame.
pub const BOSS_FRAME_TIME: f32 = 0.15;

/// Death sheet layout and pacing.
pub const BOSS_DEATH_COLS: usize = 10;
pub const BOSS_DEATH_ROWS: usize = 2;
pub const BOSS_DEATH_FRAME_TIME: f32 = 0.12;

pub const BOSS_DASH_COOLDOWN: f32 = 3.0;
pub const BOSS_DASH_DURATION: f32 = 0.5;
pub const BOSS_DASH_SPEED: f32 = 500.0;

pub const BOSS_ZIGZAG_AMPLITUDE: f32 = 50.0;
pub const BOSS_ZIGZAG_FREQUENCY: f32 = 2.0;

/// Patrol bounds relative to the spawn anchor.
pub const BOSS_PATROL_LEFT: f32 = 800.0;
pub const BOSS_PATROL_RIGHT: f32 = 600.0;
/// Vertical wander band around the spawn anchor while grounded.
pub const BOSS_GROUND_BAND: f32 = 50.0;
/// Vertical headroom above the spawn anchor while flying.
pub const BOSS_FLIGHT_BAND: f32 = 200.0;

/// Chance (percent) that a ready phase-3 teleport actually fires.
pub const BOSS_TELEPORT_CHANCE: u32 = 20;

// Projectiles
pub const MAX_PROJECTILES: usize = 50;
pub const PROJECTILE_SPEED: f32 = 300.0;
pub const PROJECTILE_DAMAGE: i32 = 200;
/// Horizontal travel distance after which a projectile despawns.
pub const PROJECTILE_MAX_RANGE: f32 = 1000.0;
/// Side length of the projectile sprite, in pixels.
pub const PROJECTILE_SPRITE_SIZE: u32 = 16;
pub const PROJECTILE_BASE_SCALE: f32 = 1.5;

/// Fallback spawn points, used when the level carries no marker.
pub const DEFAULT_PLAYER_SPAWN: (f32, f32) = (343.0, 471.0);
pub const DEFAULT_BOSS_SPAWN: (f32, f32) = (4695.33, 475.0);

/// The raw layout of the level, one character per tile.
///
/// `#` platform, `=` bridge, `w` underwater plant, `P`/`B` spawn markers,
/// `.` empty.
pub const RAW_LEVEL: [&str; 20] = [
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........................................................................................................................",
    "........P...........................................................................................B...................",
    "..................################..................================................############........................",
    "........................................................................................................................",
    "........................................wwwwww........................wwww..............................................",
    "########################################################################################################################",
    "########################################################################################################################",
];
