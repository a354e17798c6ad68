use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;

use crate::map::collision::Rect;
use crate::systems::animation::SpriteAnimation;
use crate::systems::boss::{Boss, BossAnimation, DeathSequence};

/// A tag component for entities that are controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// Top-left corner of an entity, in world units.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn is_right(self) -> bool {
        matches!(self, Facing::Right)
    }

    /// Direction multiplier for horizontal movement.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Whether the entity rests on a solid tile. Re-validated every tick by the
/// character controller's feet probe.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Grounded(pub bool);

/// World-space bounding box size of an entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Body {
    pub size: Vec2,
}

impl Body {
    pub fn rect(&self, position: &Position) -> Rect {
        Rect::new(position.0.x, position.0.y, self.size.x, self.size.y)
    }
}

/// Hit points. There is deliberately no heal path: outside of a session
/// reset, health only ever decreases.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Applies damage, clamping at zero.
    pub fn damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    /// Zeroes health outright (fatal conditions).
    pub fn deplete(&mut self) {
        self.current = 0;
    }

    /// Remaining health as a 0..=1 fraction, for the HUD.
    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}

/// Marker freezing an entity in place; the controller skips physics and
/// input for frozen entities.
#[derive(Component, Default)]
pub struct Frozen;

/// Seconds until the player may shoot again.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ShootCooldown(pub f32);

/// Seconds elapsed since the previous tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DeltaTime(pub f32);

/// Seconds elapsed since session start. Drives the cosmetic projectile
/// wobble and pulse.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GameClock(pub f32);

/// Terminal state of the session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver { won: bool },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::GameOver { .. })
    }
}

/// Previous-tick player/boss overlap, for edge-triggered contact damage.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct ContactState {
    pub was_colliding: bool,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub velocity: Velocity,
    pub facing: Facing,
    pub grounded: Grounded,
    pub body: Body,
    pub health: Health,
    pub animation: SpriteAnimation,
    pub shoot_cooldown: ShootCooldown,
}

#[derive(Bundle)]
pub struct BossBundle {
    pub boss: Boss,
    pub position: Position,
    pub facing: Facing,
    pub body: Body,
    pub health: Health,
    pub animation: BossAnimation,
    pub death: DeathSequence,
}
