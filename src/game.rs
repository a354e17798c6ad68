//! The game session: world construction, the tick schedule, and drawing.

use bevy_ecs::{
    event::EventRegistry,
    schedule::{IntoScheduleConfigs, Schedule},
    world::World,
};
use glam::Vec2;
use sdl2::keyboard::Keycode;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{
    BOSS_FRAME_HEIGHT, BOSS_FRAME_WIDTH, BOSS_MAX_HEALTH, BOSS_SCALE, PLAYER_FRAME_HEIGHT,
    PLAYER_FRAME_WIDTH, PLAYER_HEIGHT_IN_TILES, PLAYER_MAX_HEALTH,
};
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::input::{Bindings, PlayerInput};
use crate::map::Map;
use crate::systems::animation::{animation_system, SpriteAnimation};
use crate::systems::boss::{
    boss_ai_system, boss_animation_system, boss_death_system, Boss, BossAnimation, DeathSequence,
};
use crate::systems::camera::{camera_system, Camera};
use crate::systems::combat::{contact_damage_system, terminal_state_system};
use crate::systems::components::{
    Body, BossBundle, ContactState, DeltaTime, Facing, GameClock, GameStatus, Grounded, Health,
    PlayerBundle, PlayerControlled, Position, ShootCooldown, Velocity,
};
use crate::systems::player::player_movement_system;
use crate::systems::projectile::{projectile_system, ProjectilePool};
use crate::systems::render;
use crate::systems::state::{error_report_system, game_state_system};
use crate::texture::Textures;

/// The `Game` struct owns the simulation world and its tick schedule.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds a session over the built-in level.
    pub fn new() -> GameResult<Game> {
        let map = Map::new()?;
        Ok(Self::from_map(map))
    }

    /// Builds a session over an already-parsed map. Spawns the player and
    /// boss at the map's spawn points and wires up the tick schedule.
    pub fn from_map(map: Map) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<GameError>(&mut world);

        let player_spawn = map.spawn.player;
        let boss_spawn = map.spawn.boss;
        let map_height = map.pixel_size().y;
        let tile_height = map.grid.tile_height as f32;

        // Entity sizes derive from the sprite sheets: the player is drawn
        // three tiles tall, the boss at a fixed scale
        let player_scale = PLAYER_HEIGHT_IN_TILES * tile_height / PLAYER_FRAME_HEIGHT as f32;
        let player_body = Body {
            size: Vec2::new(PLAYER_FRAME_WIDTH as f32, PLAYER_FRAME_HEIGHT as f32) * player_scale,
        };
        let boss_body = Body {
            size: Vec2::new(BOSS_FRAME_WIDTH as f32, BOSS_FRAME_HEIGHT as f32) * BOSS_SCALE,
        };

        world.insert_resource(map);
        world.insert_resource(DeltaTime(0.0));
        world.insert_resource(GameClock::default());
        world.insert_resource(PlayerInput::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(ProjectilePool::default());
        world.insert_resource(GameStatus::Playing);
        world.insert_resource(ContactState::default());
        world.insert_resource(Camera::new(player_spawn, map_height));

        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(player_spawn),
            velocity: Velocity::default(),
            facing: Facing::Right,
            grounded: Grounded(false),
            body: player_body,
            health: Health::new(PLAYER_MAX_HEALTH),
            animation: SpriteAnimation::default(),
            shoot_cooldown: ShootCooldown(0.0),
        });

        world.spawn(BossBundle {
            boss: Boss::new(boss_spawn),
            position: Position(boss_spawn),
            facing: Facing::Left,
            body: boss_body,
            health: Health::new(BOSS_MAX_HEALTH),
            animation: BossAnimation::default(),
            death: DeathSequence::default(),
        });

        schedule.add_systems(
            (
                player_movement_system,
                animation_system,
                boss_ai_system,
                boss_death_system,
                boss_animation_system,
                projectile_system,
                contact_damage_system,
                terminal_state_system,
                game_state_system,
                error_report_system,
                camera_system,
            )
                .chain(),
        );

        Game { world, schedule }
    }

    /// Advances the simulation by `dt` seconds. Once the session is over the
    /// world freezes in place; only rendering continues.
    pub fn tick(&mut self, dt: f32) {
        self.world.resource_mut::<GameClock>().0 += dt;
        let status = *self.world.resource::<GameStatus>();
        if !status.is_over() {
            self.world.insert_resource(DeltaTime(dt));
            self.schedule.run(&mut self.world);
        }
        self.world.resource_mut::<PlayerInput>().clear_edges();
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        let action = self.world.resource::<Bindings>().action(keycode);
        if let Some(action) = action {
            self.world.resource_mut::<PlayerInput>().apply_key_down(action);
        }
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        let action = self.world.resource::<Bindings>().action(keycode);
        if let Some(action) = action {
            self.world.resource_mut::<PlayerInput>().apply_key_up(action);
        }
    }

    pub fn status(&self) -> GameStatus {
        *self.world.resource::<GameStatus>()
    }

    pub fn draw(&mut self, canvas: &mut Canvas<Window>, textures: &Textures) -> GameResult<()> {
        render::draw_frame(&mut self.world, canvas, textures)
    }
}
