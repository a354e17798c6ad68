#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;

use emberfall::game::Game;
use emberfall::map::Map;
use emberfall::systems::boss::Boss;
use emberfall::systems::components::PlayerControlled;

/// An open arena: air above a two-tile-thick floor, player on the left,
/// boss far enough right that its patrol bounds never reach the player.
pub const ARENA: [&str; 12] = [
    "................................................................................",
    "................................................................................",
    "................................................................................",
    "................................................................................",
    "................................................................................",
    "................................................................................",
    "...P........................................................B...................",
    "................................................................................",
    "................................................................................",
    "................................................................................",
    "################################################################################",
    "################################################################################",
];

pub const ARENA_TILE: u32 = 32;

/// One 60 FPS frame.
pub const FRAME: f32 = 1.0 / 60.0;

pub fn arena_game() -> Game {
    Game::from_map(Map::from_level(&ARENA, ARENA_TILE, ARENA_TILE).unwrap())
}

pub fn game_from(rows: &[&str], tile: u32) -> Game {
    Game::from_map(Map::from_level(rows, tile, tile).unwrap())
}

pub fn tick_n(game: &mut Game, dt: f32, n: usize) {
    for _ in 0..n {
        game.tick(dt);
    }
}

pub fn player(game: &mut Game) -> Entity {
    let mut query = game.world.query_filtered::<Entity, With<PlayerControlled>>();
    query.single(&game.world).unwrap()
}

pub fn boss(game: &mut Game) -> Entity {
    let mut query = game.world.query_filtered::<Entity, With<Boss>>();
    query.single(&game.world).unwrap()
}

/// Runs a second of frames so the player settles onto the floor.
pub fn settle_player(game: &mut Game) {
    tick_n(game, FRAME, 60);
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
