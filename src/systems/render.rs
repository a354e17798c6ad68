//! Draws the world: tile layers, entities, HUD, and the game-over banner.
//!
//! Rendering only reads simulation state; it never mutates it.

use bevy_ecs::{query::With, world::World};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, PROJECTILE_SPRITE_SIZE};
use crate::error::{GameError, GameResult};
use crate::map::grid::{LayerKind, TileFlip};
use crate::map::Map;
use crate::systems::boss::{Boss, BossAnimation, DeathSequence};
use crate::systems::camera::Camera;
use crate::systems::components::{Body, Facing, GameStatus, Health, PlayerControlled, Position};
use crate::systems::animation::SpriteAnimation;
use crate::systems::projectile::ProjectilePool;
use crate::texture::sheet::{boss_frame, death_frame, player_frame, FrameRect};
use crate::texture::Textures;

fn layer_color(name: &str) -> Color {
    match name {
        "platform" => Color::RGB(105, 105, 105),
        "bridge" => Color::RGB(139, 94, 60),
        "uw_plant" => Color::RGB(58, 121, 39),
        _ => Color::RGB(80, 80, 80),
    }
}

fn to_sdl(rect: FrameRect) -> SdlRect {
    SdlRect::new(rect.x as i32, rect.y as i32, rect.w, rect.h)
}

fn dest_rect(camera: &Camera, world_pos: Vec2, world_size: Vec2) -> SdlRect {
    let screen = camera.to_screen(world_pos);
    SdlRect::new(
        screen.x.round() as i32,
        screen.y.round() as i32,
        (world_size.x * camera.zoom).round().max(1.0) as u32,
        (world_size.y * camera.zoom).round().max(1.0) as u32,
    )
}

pub fn draw_frame(world: &mut World, canvas: &mut Canvas<Window>, textures: &Textures) -> GameResult<()> {
    let camera = *world.resource::<Camera>();
    let status = *world.resource::<GameStatus>();

    canvas.set_draw_color(Color::RGB(24, 26, 34));
    canvas.clear();

    draw_tiles(world, canvas, &camera)?;
    draw_boss(world, canvas, &camera, textures)?;
    draw_projectiles(world, canvas, &camera, textures)?;
    draw_player(world, canvas, &camera, textures)?;
    draw_hud(world, canvas)?;

    if let GameStatus::GameOver { won } = status {
        draw_banner(canvas, won)?;
    }

    canvas.present();
    Ok(())
}

fn draw_tiles(world: &World, canvas: &mut Canvas<Window>, camera: &Camera) -> GameResult<()> {
    let map = world.resource::<Map>();
    let grid = &map.grid;
    let tile_size = Vec2::new(grid.tile_width as f32, grid.tile_height as f32);

    for layer in &grid.layers {
        if !layer.visible || layer.kind != LayerKind::Tiles {
            continue;
        }
        canvas.set_draw_color(layer_color(&layer.name));
        for row in 0..grid.height {
            for col in 0..grid.width {
                let gid = layer.gids[(row * grid.width + col) as usize] & !TileFlip::all().bits();
                if gid == 0 {
                    continue;
                }
                let world_pos = Vec2::new((col * grid.tile_width) as f32, (row * grid.tile_height) as f32);
                canvas
                    .fill_rect(dest_rect(camera, world_pos, tile_size))
                    .map_err(GameError::Sdl)?;
            }
        }
    }
    Ok(())
}

fn draw_player(world: &mut World, canvas: &mut Canvas<Window>, camera: &Camera, textures: &Textures) -> GameResult<()> {
    let player = {
        let mut query =
            world.query_filtered::<(&Position, &Body, &Facing, &SpriteAnimation), With<PlayerControlled>>();
        query
            .single(world)
            .ok()
            .map(|(position, body, facing, animation)| (*position, *body, *facing, *animation))
    };
    let Some((position, body, facing, animation)) = player else {
        return Ok(());
    };

    let src = to_sdl(player_frame(animation.kind().row(), animation.frame()));
    let dst = dest_rect(camera, position.0, body.size);
    canvas
        .copy_ex(&textures.player, src, dst, 0.0, None, !facing.is_right(), false)
        .map_err(GameError::Sdl)?;
    Ok(())
}

fn draw_boss(world: &mut World, canvas: &mut Canvas<Window>, camera: &Camera, textures: &Textures) -> GameResult<()> {
    let boss = {
        let mut query = world
            .query_filtered::<(&Position, &Body, &Facing, &Health, &BossAnimation, &DeathSequence), With<Boss>>();
        query
            .single(world)
            .ok()
            .map(|(position, body, facing, health, animation, death)| {
                (*position, *body, *facing, *health, *animation, *death)
            })
    };
    let Some((position, body, facing, health, animation, death)) = boss else {
        return Ok(());
    };

    if health.is_depleted() {
        // Death animation plays once; afterwards the boss is simply gone
        if death.finished {
            return Ok(());
        }
        let query = textures.boss_death.query();
        let src = to_sdl(death_frame(query.width, query.height, death.frame));
        let dst = dest_rect(camera, position.0, body.size);
        canvas.copy(&textures.boss_death, src, dst).map_err(GameError::Sdl)?;
        return Ok(());
    }

    let texture = if facing.is_right() {
        &textures.boss_right
    } else {
        &textures.boss_left
    };
    let query = texture.query();
    let src = to_sdl(boss_frame(query.width, query.height, animation.frame));
    let dst = dest_rect(camera, position.0, body.size);
    canvas.copy(texture, src, dst).map_err(GameError::Sdl)?;
    Ok(())
}

fn draw_projectiles(world: &World, canvas: &mut Canvas<Window>, camera: &Camera, textures: &Textures) -> GameResult<()> {
    let pool = world.resource::<ProjectilePool>();
    for (_, projectile) in pool.iter_active() {
        let size = PROJECTILE_SPRITE_SIZE as f32 * projectile.scale;
        let top_left = projectile.position - Vec2::splat(size / 2.0);
        let dst = dest_rect(camera, top_left, Vec2::splat(size));
        canvas
            .copy_ex(
                &textures.projectile,
                None,
                dst,
                projectile.rotation as f64,
                None,
                projectile.velocity.x < 0.0,
                false,
            )
            .map_err(GameError::Sdl)?;
    }
    Ok(())
}

fn draw_hud(world: &mut World, canvas: &mut Canvas<Window>) -> GameResult<()> {
    let player_fraction = {
        let mut query = world.query_filtered::<&Health, With<PlayerControlled>>();
        query.single(world).ok().map(|health| health.fraction())
    };
    let boss_fraction = {
        let mut query = world.query_filtered::<&Health, With<Boss>>();
        query.single(world).ok().map(|health| health.fraction())
    };

    if let Some(fraction) = player_fraction {
        draw_bar(canvas, 20, fraction, Color::RGB(66, 194, 98))?;
    }
    if let Some(fraction) = boss_fraction {
        draw_bar(canvas, DISPLAY_WIDTH as i32 - 320, fraction, Color::RGB(194, 54, 54))?;
    }
    Ok(())
}

fn draw_bar(canvas: &mut Canvas<Window>, x: i32, fraction: f32, color: Color) -> GameResult<()> {
    const WIDTH: u32 = 300;
    const HEIGHT: u32 = 20;
    canvas.set_draw_color(Color::RGB(40, 40, 40));
    canvas.fill_rect(SdlRect::new(x, 20, WIDTH, HEIGHT)).map_err(GameError::Sdl)?;
    let fill = (WIDTH as f32 * fraction.clamp(0.0, 1.0)) as u32;
    if fill > 0 {
        canvas.set_draw_color(color);
        canvas.fill_rect(SdlRect::new(x, 20, fill, HEIGHT)).map_err(GameError::Sdl)?;
    }
    Ok(())
}

fn draw_banner(canvas: &mut Canvas<Window>, won: bool) -> GameResult<()> {
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 160));
    canvas
        .fill_rect(SdlRect::new(0, 0, DISPLAY_WIDTH, DISPLAY_HEIGHT))
        .map_err(GameError::Sdl)?;

    let color = if won {
        Color::RGB(66, 194, 98)
    } else {
        Color::RGB(194, 54, 54)
    };
    canvas.set_draw_color(color);
    canvas
        .fill_rect(SdlRect::new(
            DISPLAY_WIDTH as i32 / 2 - 150,
            DISPLAY_HEIGHT as i32 / 2 - 30,
            300,
            60,
        ))
        .map_err(GameError::Sdl)?;
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
