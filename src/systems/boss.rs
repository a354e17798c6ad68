//! Boss AI: a three-phase state machine keyed purely off health, driving
//! patrol, teleport, dash, and zigzag movement, plus the one-shot death
//! sequence.

use bevy_ecs::{
    component::Component,
    query::With,
    system::{Query, Res},
};
use glam::Vec2;
use rand::Rng;
use strum_macros::Display;
use tracing::{debug, info, trace};

use crate::constants::{
    BOSS_DASH_COOLDOWN, BOSS_DASH_DURATION, BOSS_DASH_SPEED, BOSS_DEATH_COLS, BOSS_DEATH_FRAME_TIME,
    BOSS_DEATH_ROWS, BOSS_FLIGHT_BAND, BOSS_FRAME_COUNT, BOSS_FRAME_TIME, BOSS_GROUND_BAND,
    BOSS_PATROL_LEFT, BOSS_PATROL_RIGHT, BOSS_PHASE2_THRESHOLD, BOSS_PHASE3_THRESHOLD,
    BOSS_TELEPORT_CHANCE, BOSS_ZIGZAG_AMPLITUDE, BOSS_ZIGZAG_FREQUENCY,
};
use crate::platform;
use crate::systems::components::{Body, DeltaTime, Facing, Health, Position};
use crate::map::Map;

/// A boss behavior tier. Derived from current health every tick; never
/// stored, so it cannot desync from the health value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    One,
    Two,
    Three,
}

impl Phase {
    pub fn for_health(health: i32) -> Phase {
        if health > BOSS_PHASE2_THRESHOLD {
            Phase::One
        } else if health > BOSS_PHASE3_THRESHOLD {
            Phase::Two
        } else {
            Phase::Three
        }
    }

    pub fn base_speed(self) -> f32 {
        match self {
            Phase::One => 100.0,
            Phase::Two => 120.0,
            Phase::Three => 200.0,
        }
    }

    pub fn flying(self) -> bool {
        matches!(self, Phase::Three)
    }

    /// Seconds between teleport checks. Phase 1 never teleports.
    pub fn teleport_cooldown(self) -> Option<f32> {
        match self {
            Phase::One => None,
            Phase::Two => Some(4.0),
            Phase::Three => Some(2.0),
        }
    }
}

/// Movement limits derived from the spawn anchor, not the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Component, Debug)]
pub struct Boss {
    /// Spawn anchor the patrol bounds derive from.
    pub spawn: Vec2,
    pub speed: f32,
    pub flying: bool,
    pub dashing: bool,
    /// Counts up to the dash cooldown, then doubles as the elapsed-dash clock.
    pub dash_timer: f32,
    /// Accumulating phase driving the zigzag sinusoids.
    pub zigzag_timer: f32,
    pub teleport_timer: f32,
    pub teleport_cooldown: f32,
}

impl Boss {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            spawn,
            speed: Phase::One.base_speed(),
            flying: false,
            dashing: false,
            dash_timer: 0.0,
            zigzag_timer: 0.0,
            teleport_timer: 0.0,
            teleport_cooldown: 0.0,
        }
    }

    pub fn movement_bounds(&self, phase: Phase) -> PatrolBounds {
        let (top, bottom) = if phase.flying() {
            (self.spawn.y - BOSS_FLIGHT_BAND, self.spawn.y)
        } else {
            (self.spawn.y - BOSS_GROUND_BAND, self.spawn.y + BOSS_GROUND_BAND)
        };
        PatrolBounds {
            left: self.spawn.x - BOSS_PATROL_LEFT,
            right: self.spawn.x + BOSS_PATROL_RIGHT,
            top,
            bottom,
        }
    }
}

/// The 6-frame skill loop, advanced while the boss is alive.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct BossAnimation {
    pub frame: usize,
    timer: f32,
}

/// The one-shot death animation. `finished` is terminal: once set, the
/// sequence never advances or restarts.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct DeathSequence {
    pub playing: bool,
    pub frame: usize,
    pub timer: f32,
    pub finished: bool,
}

impl DeathSequence {
    pub const FRAME_COUNT: usize = BOSS_DEATH_COLS * BOSS_DEATH_ROWS;
}

pub fn boss_ai_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    mut bosses: Query<(&mut Boss, &mut Position, &mut Facing, &Health, &Body)>,
) {
    let delta = delta_time.0;
    for (mut boss, mut position, mut facing, health, body) in bosses.iter_mut() {
        if health.is_depleted() {
            boss.speed = 0.0;
            boss.dashing = false;
            continue;
        }

        // Phase parameters are re-applied every tick, so crossing a health
        // threshold takes effect immediately
        let phase = Phase::for_health(health.current());
        boss.speed = phase.base_speed();
        boss.flying = phase.flying();
        if let Some(cooldown) = phase.teleport_cooldown() {
            boss.teleport_cooldown = cooldown;
        }

        let bounds = boss.movement_bounds(phase);
        let ground = map.pixel_size().y - body.size.y;

        boss.dash_timer += delta;
        boss.zigzag_timer += delta;
        boss.teleport_timer += delta;

        match phase {
            Phase::Three => {
                // Probabilistic teleport: the cooldown gates how often the
                // roll happens, the roll decides whether it fires
                if boss.teleport_timer >= boss.teleport_cooldown {
                    let mut rng = platform::rng();
                    if rng.random_range(0..100) < BOSS_TELEPORT_CHANCE {
                        position.0.x = rng.random_range(bounds.left..bounds.right);
                        position.0.y = rng.random_range(bounds.top..bounds.bottom);
                        if position.0.y < ground - BOSS_FLIGHT_BAND {
                            position.0.y = ground - BOSS_FLIGHT_BAND;
                        }
                        debug!(x = position.0.x, y = position.0.y, "boss teleported");
                    }
                    boss.teleport_timer = 0.0;
                }

                dash_or_patrol(&mut boss, &mut position, &mut facing, &bounds, delta, true);

                // Keep the flight altitude inside the band above the ground
                if position.0.y < ground - BOSS_FLIGHT_BAND {
                    position.0.y = ground - BOSS_FLIGHT_BAND;
                }
                if position.0.y > ground {
                    position.0.y = ground;
                }
                position.0.x = position.0.x.clamp(bounds.left, bounds.right);
                position.0.y = position.0.y.clamp(bounds.top, bounds.bottom);
            }
            Phase::Two => {
                if boss.teleport_timer >= boss.teleport_cooldown {
                    let mut rng = platform::rng();
                    position.0.x = rng.random_range(bounds.left..bounds.right);
                    position.0.y = ground;
                    boss.teleport_timer = 0.0;
                    debug!(x = position.0.x, "boss teleported to ground position");
                }

                dash_or_patrol(&mut boss, &mut position, &mut facing, &bounds, delta, false);

                position.0.x = position.0.x.clamp(bounds.left, bounds.right);
                position.0.y = ground;
            }
            Phase::One => {
                // Plain bounce-patrol, locked to the ground
                position.0.x += facing.sign() * boss.speed * delta;
                bounce(&mut position, &mut facing, &bounds);
                position.0.x = position.0.x.clamp(bounds.left, bounds.right);
                position.0.y = ground;
            }
        }
    }
}

/// Dash when the cooldown allows, otherwise patrol with the zigzag overlay.
fn dash_or_patrol(
    boss: &mut Boss,
    position: &mut Position,
    facing: &mut Facing,
    bounds: &PatrolBounds,
    delta: f32,
    vertical_zigzag: bool,
) {
    if !boss.dashing && boss.dash_timer >= BOSS_DASH_COOLDOWN {
        boss.dashing = true;
        boss.dash_timer = 0.0;
        trace!(direction = ?facing, "boss dash started");
    }

    if boss.dashing {
        position.0.x += facing.sign() * BOSS_DASH_SPEED * delta;
        if boss.dash_timer > BOSS_DASH_DURATION {
            boss.dashing = false;
            boss.dash_timer = 0.0;
        }
    } else {
        position.0.x += facing.sign() * boss.speed * delta;
        position.0.x += BOSS_ZIGZAG_AMPLITUDE * (boss.zigzag_timer * BOSS_ZIGZAG_FREQUENCY).sin();
        if vertical_zigzag {
            // Smaller, slower vertical sinusoid for the floating effect
            position.0.y += BOSS_ZIGZAG_AMPLITUDE * 0.2 * (boss.zigzag_timer * BOSS_ZIGZAG_FREQUENCY * 0.5).sin();
        }
        bounce(position, facing, bounds);
    }
}

/// Clamp to the horizontal bounds and flip direction on contact.
fn bounce(position: &mut Position, facing: &mut Facing, bounds: &PatrolBounds) {
    if position.0.x < bounds.left {
        *facing = Facing::Right;
        position.0.x = bounds.left;
    }
    if position.0.x > bounds.right {
        *facing = Facing::Left;
        position.0.x = bounds.right;
    }
}

/// Steps the death sequence once health is gone. Triggering is one-shot:
/// after `finished`, repeated ticks change nothing.
pub fn boss_death_system(delta_time: Res<DeltaTime>, mut bosses: Query<(&Health, &mut DeathSequence), With<Boss>>) {
    for (health, mut death) in bosses.iter_mut() {
        if !health.is_depleted() || death.finished {
            continue;
        }
        if !death.playing {
            death.playing = true;
            death.frame = 0;
            death.timer = 0.0;
            info!("boss death sequence started");
        }
        death.timer += delta_time.0;
        if death.timer >= BOSS_DEATH_FRAME_TIME {
            death.timer = 0.0;
            death.frame += 1;
            if death.frame >= DeathSequence::FRAME_COUNT {
                death.playing = false;
                death.finished = true;
                info!("boss death sequence finished");
            }
        }
    }
}

/// Advances the 6-frame skill loop while the boss is alive.
pub fn boss_animation_system(delta_time: Res<DeltaTime>, mut bosses: Query<(&mut BossAnimation, &Health), With<Boss>>) {
    for (mut animation, health) in bosses.iter_mut() {
        if health.is_depleted() {
            continue;
        }
        animation.timer += delta_time.0;
        if animation.timer >= BOSS_FRAME_TIME {
            animation.timer = 0.0;
            animation.frame = (animation.frame + 1) % BOSS_FRAME_COUNT;
        }
    }
}
