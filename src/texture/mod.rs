//! Texture loading for the entity sprite sheets.

pub mod sheet;

use std::path::Path;

use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use tracing::{info, warn};

use crate::constants::PROJECTILE_SPRITE_SIZE;
use crate::error::{GameResult, TextureError};

/// All textures the renderer needs, loaded once at startup.
pub struct Textures {
    pub player: Texture,
    pub boss_right: Texture,
    pub boss_left: Texture,
    pub boss_death: Texture,
    pub projectile: Texture,
}

impl Textures {
    pub fn load(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        let player = load_bmp(texture_creator, "assets/player.bmp")?;
        let boss_right = load_bmp(texture_creator, "assets/boss_right.bmp")?;
        let boss_left = load_bmp(texture_creator, "assets/boss_left.bmp")?;
        let boss_death = load_bmp(texture_creator, "assets/boss_death.bmp")?;

        // The projectile sprite is optional; fall back to a generated flame
        let projectile = match load_bmp(texture_creator, "assets/fire.bmp") {
            Ok(texture) => texture,
            Err(error) => {
                warn!(%error, "projectile sprite missing, generating a fallback");
                generate_fire_texture(texture_creator)?
            }
        };

        info!("textures loaded");
        Ok(Self {
            player,
            boss_right,
            boss_left,
            boss_death,
            projectile,
        })
    }
}

fn load_bmp(texture_creator: &TextureCreator<WindowContext>, path: &str) -> GameResult<Texture> {
    let surface = Surface::load_bmp(Path::new(path))
        .map_err(|e| TextureError::LoadFailed(format!("{path}: {e}")))?;
    let texture = surface
        .as_texture(texture_creator)
        .map_err(|e| TextureError::CreateFailed(e.to_string()))?;
    Ok(texture)
}

/// Draws a small radial flame: an orange core inside a red ring, on a
/// transparent background.
fn generate_fire_texture(texture_creator: &TextureCreator<WindowContext>) -> GameResult<Texture> {
    let size = PROJECTILE_SPRITE_SIZE;
    let mut surface = Surface::new(size, size, PixelFormatEnum::RGBA32)
        .map_err(|e| TextureError::CreateFailed(e.to_string()))?;

    let center = size as f32 / 2.0;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < center {
                let color = if distance < center / 2.0 {
                    Color::RGB(255, 165, 0)
                } else {
                    Color::RED
                };
                surface
                    .fill_rect(SdlRect::new(x as i32, y as i32, 1, 1), color)
                    .map_err(TextureError::CreateFailed)?;
            }
        }
    }

    let texture = surface
        .as_texture(texture_creator)
        .map_err(|e| TextureError::CreateFailed(e.to_string()))?;
    Ok(texture)
}
