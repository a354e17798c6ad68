use glam::Vec2;
use pretty_assertions::assert_eq;

use emberfall::constants::{CONTACT_DAMAGE, PLAYER_MAX_HEALTH, TILE_SIZE};
use emberfall::map::Map;
use emberfall::systems::boss::DeathSequence;
use emberfall::systems::camera::Camera;
use emberfall::systems::components::{Frozen, GameStatus, Grounded, Health, Position, Velocity};
use emberfall::input::PlayerInput;

mod common;
use common::{arena_game, boss, player, settle_player, tick_n, FRAME};

#[test]
fn test_built_in_level_parses() {
    let map = Map::new().unwrap();
    assert_eq!(map.grid.width, 120);
    assert_eq!(map.grid.height, 20);
    assert_eq!(map.grid.tile_width, TILE_SIZE);
    assert_eq!(map.spawn.player, Vec2::new(256.0, 448.0));
    assert_eq!(map.spawn.boss, Vec2::new(3200.0, 448.0));
}

#[test]
fn test_contact_damage_is_edge_triggered() {
    let mut game = arena_game();
    let player_entity = player(&mut game);
    let boss_entity = boss(&mut game);

    // Park the player inside the boss's body
    let boss_position = game.world.get::<Position>(boss_entity).unwrap().0;
    game.world.get_mut::<Position>(player_entity).unwrap().0 =
        Vec2::new(boss_position.x + 20.0, 230.0);

    // Sustained overlap damages exactly once, on the rising edge
    tick_n(&mut game, 0.001, 3);
    let health = game.world.get::<Health>(player_entity).unwrap();
    assert_eq!(health.current(), PLAYER_MAX_HEALTH - CONTACT_DAMAGE);
}

#[test]
fn test_contact_damage_reapplies_on_new_contact() {
    let mut game = arena_game();
    let player_entity = player(&mut game);
    let boss_entity = boss(&mut game);

    let boss_position = game.world.get::<Position>(boss_entity).unwrap().0;
    game.world.get_mut::<Position>(player_entity).unwrap().0 =
        Vec2::new(boss_position.x + 20.0, 230.0);
    tick_n(&mut game, 0.001, 2);

    // Separate, then collide again: a fresh rising edge
    game.world.get_mut::<Position>(player_entity).unwrap().0 = Vec2::new(100.0, 230.0);
    game.tick(0.001);
    game.world.get_mut::<Position>(player_entity).unwrap().0 =
        Vec2::new(boss_position.x + 20.0, 230.0);
    game.tick(0.001);

    let health = game.world.get::<Health>(player_entity).unwrap();
    assert_eq!(health.current(), PLAYER_MAX_HEALTH - 2 * CONTACT_DAMAGE);
}

#[test]
fn test_player_death_is_a_loss_and_freezes() {
    let mut game = arena_game();
    let player_entity = player(&mut game);
    settle_player(&mut game);

    game.world.get_mut::<Health>(player_entity).unwrap().deplete();
    game.tick(FRAME);

    assert_eq!(game.status(), GameStatus::GameOver { won: false });
    assert!(game.world.get::<Frozen>(player_entity).is_some());

    // The frozen world no longer simulates
    let before = game.world.get::<Position>(player_entity).unwrap().0;
    game.world.resource_mut::<PlayerInput>().right = true;
    tick_n(&mut game, FRAME, 5);
    assert_eq!(game.world.get::<Position>(player_entity).unwrap().0, before);
}

#[test]
fn test_boss_defeat_without_finished_sequence_is_not_a_win() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    game.world.get_mut::<Health>(boss_entity).unwrap().deplete();
    tick_n(&mut game, FRAME, 5);

    let death = game.world.get::<DeathSequence>(boss_entity).unwrap();
    assert!(!death.finished);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_win_and_loss_are_exclusive() {
    let mut game = arena_game();
    let player_entity = player(&mut game);
    let boss_entity = boss(&mut game);

    // Both terminal conditions arm on the same tick; the session settles on
    // exactly one outcome
    game.world.get_mut::<Health>(player_entity).unwrap().deplete();
    game.world.get_mut::<Health>(boss_entity).unwrap().deplete();
    {
        let mut death = game.world.get_mut::<DeathSequence>(boss_entity).unwrap();
        death.finished = true;
    }
    game.tick(FRAME);

    assert_eq!(game.status(), GameStatus::GameOver { won: false });
}

#[test]
fn test_camera_follows_x_and_ratchets_y() {
    let mut game = arena_game();
    let player_entity = player(&mut game);
    settle_player(&mut game);

    let settled = game.world.resource::<Camera>().target;
    let player_x = game.world.get::<Position>(player_entity).unwrap().0.x;
    assert_eq!(settled.x, player_x);

    // Jumping moves the player up; the camera's Y never follows back down
    game.world.resource_mut::<PlayerInput>().jump = true;
    tick_n(&mut game, FRAME, 10);
    let player_position = game.world.get::<Position>(player_entity).unwrap().0;
    assert!(player_position.y < 224.0);
    let camera = game.world.resource::<Camera>();
    assert_eq!(camera.target.y, settled.y);
}

#[test]
fn test_velocity_zeroed_while_frozen() {
    let mut game = arena_game();
    let player_entity = player(&mut game);
    settle_player(&mut game);

    game.world.resource_mut::<PlayerInput>().right = true;
    game.tick(FRAME);
    assert!(game.world.get::<Velocity>(player_entity).unwrap().0.x > 0.0);
    assert!(game.world.get::<Grounded>(player_entity).unwrap().0);

    game.world.entity_mut(player_entity).insert(Frozen);
    game.world.resource_mut::<PlayerInput>().right = true;
    game.tick(FRAME);
    assert_eq!(game.world.get::<Velocity>(player_entity).unwrap().0.x, 0.0);
}
