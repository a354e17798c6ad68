//! The fixed-capacity projectile pool and its per-tick update.

use bevy_ecs::{
    query::With,
    resource::Resource,
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use tracing::{debug, trace};

use crate::constants::{
    MAX_PROJECTILES, PROJECTILE_BASE_SCALE, PROJECTILE_DAMAGE, PROJECTILE_MAX_RANGE, PROJECTILE_SPEED,
    PROJECTILE_SPRITE_SIZE,
};
use crate::map::collision::Rect;
use crate::map::Map;
use crate::systems::boss::Boss;
use crate::systems::components::{Body, DeltaTime, Facing, GameClock, Health, Position};

#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub position: Vec2,
    /// Spawn point, kept for the travel-range cutoff.
    pub initial_position: Vec2,
    pub velocity: Vec2,
    pub damage: i32,
    /// Pulsing draw scale; the hitbox is sized from it.
    pub scale: f32,
    /// Visual-only spin, in degrees.
    pub rotation: f32,
}

/// Fixed array of projectile slots. A slot holds at most one projectile;
/// spawning picks the first free slot by index and silently drops the shot
/// when the pool is full.
#[derive(Resource, Debug)]
pub struct ProjectilePool {
    slots: [Option<Projectile>; MAX_PROJECTILES],
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self {
            slots: [None; MAX_PROJECTILES],
        }
    }
}

impl ProjectilePool {
    /// Fires a projectile from `origin` in the facing direction. Returns
    /// whether a slot was available.
    pub fn spawn(&mut self, origin: Vec2, facing: Facing) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(Projectile {
                    position: origin,
                    initial_position: origin,
                    velocity: Vec2::new(facing.sign() * PROJECTILE_SPEED, 0.0),
                    damage: PROJECTILE_DAMAGE,
                    scale: PROJECTILE_BASE_SCALE,
                    rotation: 0.0,
                });
                true
            }
            None => {
                trace!("projectile pool exhausted, shot dropped");
                false
            }
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Projectile)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|projectile| (index, projectile)))
    }
}

/// Integrates every active projectile, applies the cosmetic wobble/spin/
/// pulse, damages the boss on overlap, and frees slots that leave the map
/// or exceed their travel range.
pub fn projectile_system(
    map: Res<Map>,
    delta_time: Res<DeltaTime>,
    clock: Res<GameClock>,
    mut pool: ResMut<ProjectilePool>,
    mut bosses: Query<(&Position, &Body, &mut Health), With<Boss>>,
) {
    let delta = delta_time.0;
    let map_size = map.pixel_size();
    let mut boss = bosses.single_mut().ok();

    for index in 0..MAX_PROJECTILES {
        let Some(mut projectile) = pool.slots[index] else {
            continue;
        };

        projectile.position += projectile.velocity * delta;
        // Cosmetic flame effects; slot index staggers the sinusoids
        projectile.position.y += (clock.0 * 10.0 + index as f32).sin() * 0.5;
        projectile.rotation += if projectile.velocity.x > 0.0 { 10.0 } else { -10.0 } * delta;
        projectile.scale = PROJECTILE_BASE_SCALE + (clock.0 * 15.0 + index as f32).sin() * 0.3;

        if let Some((boss_position, boss_body, boss_health)) = boss.as_mut() {
            if !boss_health.is_depleted() {
                let size = PROJECTILE_SPRITE_SIZE as f32 * projectile.scale * 0.5;
                let hitbox = Rect::new(
                    projectile.position.x - size / 2.0,
                    projectile.position.y - size / 2.0,
                    size,
                    size,
                );
                if hitbox.intersects(&boss_body.rect(boss_position)) {
                    boss_health.damage(projectile.damage);
                    debug!(damage = projectile.damage, remaining = boss_health.current(), "projectile hit boss");
                    pool.slots[index] = None;
                    continue;
                }
            }
        }

        let out_of_bounds = projectile.position.x < 0.0
            || projectile.position.x > map_size.x
            || projectile.position.y < 0.0
            || projectile.position.y > map_size.y;
        let out_of_range = (projectile.position.x - projectile.initial_position.x).abs() > PROJECTILE_MAX_RANGE;

        pool.slots[index] = if out_of_bounds || out_of_range {
            None
        } else {
            Some(projectile)
        };
    }
}
