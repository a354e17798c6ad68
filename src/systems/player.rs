//! The character controller: input-driven horizontal movement, gravity,
//! axis-separated tile collision, shooting, and the grounded-floor safeguard.

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::With,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use tracing::warn;

use crate::constants::{
    COLLISION_EPSILON, GRAVITY, JUMP_VELOCITY, MAX_FALL_SPEED, MOVE_SPEED, SHOOT_COOLDOWN,
};
use crate::error::GameError;
use crate::input::PlayerInput;
use crate::map::collision::Rect;
use crate::map::Map;
use crate::systems::animation::{AnimationKind, SpriteAnimation};
use crate::systems::components::{
    Body, DeltaTime, Facing, Frozen, Grounded, Health, PlayerControlled, Position, ShootCooldown, Velocity,
};
use crate::systems::projectile::ProjectilePool;

/// Runs the full per-tick character pipeline, in a fixed order: animation
/// selection, input, jumping, shooting, gravity, X collision, Y collision,
/// map-bounds clamping, and the feet probe.
#[allow(clippy::type_complexity)]
pub fn player_movement_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    input: Res<PlayerInput>,
    mut pool: ResMut<ProjectilePool>,
    mut commands: Commands,
    mut players: Query<
        (
            Entity,
            &mut Position,
            &mut Velocity,
            &mut Facing,
            &mut Grounded,
            &mut SpriteAnimation,
            &mut ShootCooldown,
            &mut Health,
            &Body,
            Option<&Frozen>,
        ),
        With<PlayerControlled>,
    >,
    mut errors: EventWriter<GameError>,
) {
    let delta = delta_time.0;
    let (entity, mut position, mut velocity, mut facing, mut grounded, mut animation, mut cooldown, mut health, body, frozen) =
        match players.single_mut() {
            Ok(player) => player,
            Err(e) => {
                errors.write(GameError::InvalidState(format!(
                    "no/multiple entities queried for player system: {e}"
                )));
                return;
            }
        };

    if frozen.is_some() {
        velocity.0.x = 0.0;
        return;
    }

    // Movement-derived animation requests; one-shots keep playing regardless
    if !animation.is_one_shot_active() {
        if input.left || input.right {
            animation.request(AnimationKind::Run);
        } else if input.jump && grounded.0 {
            animation.request(AnimationKind::Jump);
        } else if animation.kind() != AnimationKind::Idle {
            animation.request(AnimationKind::Idle);
        }
    }

    // Instantaneous horizontal velocity, no acceleration model
    let mut move_x = 0.0;
    if input.left {
        *facing = Facing::Left;
        move_x -= MOVE_SPEED;
    }
    if input.right {
        *facing = Facing::Right;
        move_x += MOVE_SPEED;
    }

    if input.jump && grounded.0 {
        velocity.0.y = JUMP_VELOCITY;
        grounded.0 = false;
    }

    cooldown.0 -= delta;
    if input.shoot && cooldown.0 <= 0.0 {
        let origin = Vec2::new(
            position.0.x + if facing.is_right() { body.size.x } else { 0.0 },
            position.0.y + body.size.y / 2.0,
        );
        pool.spawn(origin, *facing);
        cooldown.0 = SHOOT_COOLDOWN;
    }

    velocity.0.y += GRAVITY * delta;
    if velocity.0.y > MAX_FALL_SPEED {
        velocity.0.y = MAX_FALL_SPEED;
    }
    velocity.0.x = move_x;

    // X axis: move, then resolve against the first colliding tile
    let mut rect = body.rect(&position);
    let candidate_x = Rect {
        x: rect.x + velocity.0.x * delta,
        ..rect
    };
    match map.find_solid_tile(candidate_x) {
        None => position.0.x = candidate_x.x,
        Some(tile) => {
            if velocity.0.x > 0.0 {
                position.0.x = tile.x - body.size.x - COLLISION_EPSILON;
            } else {
                position.0.x = tile.right() + COLLISION_EPSILON;
            }
            velocity.0.x = 0.0;
        }
    }
    rect.x = position.0.x;

    // Y axis, fully independent of X
    let candidate_y = Rect {
        y: rect.y + velocity.0.y * delta,
        ..rect
    };
    match map.find_solid_tile(candidate_y) {
        None => {
            position.0.y = candidate_y.y;
            grounded.0 = false;
        }
        Some(tile) => {
            if velocity.0.y > 0.0 {
                position.0.y = tile.y - body.size.y;
                grounded.0 = true;
            } else {
                position.0.y = tile.bottom() + COLLISION_EPSILON;
                velocity.0.y = 0.0;
            }
        }
    }

    // Keep inside the map; the bottom edge counts as ground
    let map_size = map.pixel_size();
    if position.0.x < 0.0 {
        position.0.x = 0.0;
    }
    if position.0.x > map_size.x - body.size.x {
        position.0.x = map_size.x - body.size.x;
    }
    if position.0.y < 0.0 {
        position.0.y = 0.0;
        velocity.0.y = 0.0;
    }
    if position.0.y > map_size.y - body.size.y {
        position.0.y = map_size.y - body.size.y;
        grounded.0 = true;
        velocity.0.y = 0.0;
    }

    // A grounded character must have a tile under its feet; anything else
    // means it fell out of the collision grid and the run ends.
    if grounded.0 {
        let feet = Rect::new(position.0.x, position.0.y + body.size.y - 1.0, body.size.x, 2.0);
        if map.find_solid_tile(feet).is_none() {
            warn!(
                x = position.0.x,
                y = position.0.y,
                "grounded with no supporting tile, treating as fatal fall-through"
            );
            health.deplete();
            commands.entity(entity).insert(Frozen);
        }
    }
}
