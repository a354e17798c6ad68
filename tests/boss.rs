use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use emberfall::constants::{
    BOSS_DASH_SPEED, BOSS_FLIGHT_BAND, BOSS_MAX_HEALTH, BOSS_PHASE2_THRESHOLD,
};
use emberfall::systems::boss::{Boss, DeathSequence, Phase};
use emberfall::systems::components::{Facing, GameStatus, Health, Position};

mod common;
use common::{arena_game, assert_close, boss, tick_n, FRAME};

/// Ground level for the boss in the arena: map height minus the boss body.
const ARENA_BOSS_GROUND: f32 = 384.0 - 172.8;

#[test]
fn test_phase_one_locks_to_ground_and_patrols() {
    let mut game = arena_game();
    let boss = boss(&mut game);

    game.tick(FRAME);

    let position = game.world.get::<Position>(boss).unwrap();
    assert_close(position.0.y, ARENA_BOSS_GROUND);

    // Facing left at patrol speed 100
    let expected_x = 1920.0 - 100.0 * FRAME;
    assert_close(position.0.x, expected_x);
}

#[test]
fn test_patrol_bounces_at_bound() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    // Left bound is spawn.x - 800 = 1120; start just inside it moving left
    game.world.get_mut::<Position>(boss_entity).unwrap().0.x = 1121.0;
    game.tick(0.1);

    let position = game.world.get::<Position>(boss_entity).unwrap();
    assert_eq!(position.0.x, 1120.0);
    assert_eq!(*game.world.get::<Facing>(boss_entity).unwrap(), Facing::Right);
}

#[test]
fn test_phase_parameters_reapply_every_tick() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    game.tick(FRAME);
    assert_eq!(game.world.get::<Boss>(boss_entity).unwrap().speed, Phase::One.base_speed());

    // Crossing the phase-2 threshold takes effect on the next tick
    game.world
        .get_mut::<Health>(boss_entity)
        .unwrap()
        .damage(BOSS_MAX_HEALTH - BOSS_PHASE2_THRESHOLD);
    game.tick(FRAME);

    let boss = game.world.get::<Boss>(boss_entity).unwrap();
    assert_eq!(boss.speed, Phase::Two.base_speed());
    assert_eq!(boss.teleport_cooldown, 4.0);
    assert!(!boss.flying);
}

#[test]
fn test_dash_moves_at_dash_speed() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    // Phase 2, with the dash cooldown about to expire and the teleport
    // timer far from firing
    game.world
        .get_mut::<Health>(boss_entity)
        .unwrap()
        .damage(BOSS_MAX_HEALTH - 3000);
    {
        let mut boss = game.world.get_mut::<Boss>(boss_entity).unwrap();
        boss.dash_timer = 2.95;
        boss.teleport_timer = 0.0;
    }
    let start_x = game.world.get::<Position>(boss_entity).unwrap().0.x;

    game.tick(0.1);

    let boss = game.world.get::<Boss>(boss_entity).unwrap();
    assert!(boss.dashing);
    // Dashing left at the fixed dash speed, no zigzag overlay
    let position = game.world.get::<Position>(boss_entity).unwrap();
    assert_close(position.0.x, start_x - BOSS_DASH_SPEED * 0.1);

    // The dash ends once its duration elapses
    tick_n(&mut game, 0.1, 7);
    assert!(!game.world.get::<Boss>(boss_entity).unwrap().dashing);
}

#[test]
fn test_death_zeroes_speed_and_cancels_dash() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    {
        let mut boss = game.world.get_mut::<Boss>(boss_entity).unwrap();
        boss.dashing = true;
    }
    game.world.get_mut::<Health>(boss_entity).unwrap().deplete();
    game.tick(FRAME);

    let boss = game.world.get::<Boss>(boss_entity).unwrap();
    assert_eq!(boss.speed, 0.0);
    assert!(!boss.dashing);
}

#[test]
fn test_phase_three_stays_in_flight_band_and_bounds() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    game.world
        .get_mut::<Health>(boss_entity)
        .unwrap()
        .damage(BOSS_MAX_HEALTH - 1000);

    // A second of phase-3 movement, teleports and all
    tick_n(&mut game, FRAME, 60);

    let boss = game.world.get::<Boss>(boss_entity).unwrap();
    assert!(boss.flying);
    let bounds = boss.movement_bounds(Phase::Three);

    let position = game.world.get::<Position>(boss_entity).unwrap();
    assert_that!(position.0.x).is_greater_than_or_equal_to(bounds.left);
    assert_that!(position.0.x).is_less_than_or_equal_to(bounds.right);
    assert_that!(position.0.y).is_greater_than_or_equal_to(bounds.top);
    assert_that!(position.0.y).is_less_than_or_equal_to(bounds.bottom);
    assert_that!(position.0.y).is_greater_than_or_equal_to(ARENA_BOSS_GROUND - BOSS_FLIGHT_BAND - 1e-3);
}

#[test]
fn test_death_sequence_plays_once_to_completion() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    game.world.get_mut::<Health>(boss_entity).unwrap().deplete();

    // 20 frames at 0.12s each
    tick_n(&mut game, 0.12, 10);
    let death = game.world.get::<DeathSequence>(boss_entity).unwrap();
    assert!(death.playing);
    assert!(!death.finished);

    tick_n(&mut game, 0.12, 15);
    let death = game.world.get::<DeathSequence>(boss_entity).unwrap();
    assert!(death.finished);
    assert!(!death.playing);
    assert_eq!(death.frame, DeathSequence::FRAME_COUNT);
    assert_eq!(game.status(), GameStatus::GameOver { won: true });

    // Terminal: force the session back open and keep ticking; the sequence
    // never re-triggers or advances
    game.world.insert_resource(GameStatus::Playing);
    tick_n(&mut game, 0.12, 10);
    let death = game.world.get::<DeathSequence>(boss_entity).unwrap();
    assert!(death.finished);
    assert!(!death.playing);
    assert_eq!(death.frame, DeathSequence::FRAME_COUNT);
}

#[test]
fn test_spawn_anchor_not_position_derives_bounds() {
    let mut game = arena_game();
    let boss_entity = boss(&mut game);

    // Move the boss far from its anchor; bounds stay anchored to the spawn
    game.world.get_mut::<Position>(boss_entity).unwrap().0 = Vec2::new(1300.0, 100.0);
    let boss = game.world.get::<Boss>(boss_entity).unwrap();
    let bounds = boss.movement_bounds(Phase::One);
    assert_eq!(bounds.left, 1120.0);
    assert_eq!(bounds.right, 2520.0);
}
