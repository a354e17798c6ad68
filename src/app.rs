use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{error, info, warn};

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, LOOP_TIME};
use crate::game::Game;
use crate::platform;
use crate::texture::Textures;

pub struct App {
    game: Game,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    textures: Textures,
    paused: bool,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Emberfall", DISPLAY_WIDTH, DISPLAY_HEIGHT)
            .position_centered()
            .build()?;

        let canvas = window.into_canvas().build()?;
        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));
        let textures = Textures::load(texture_creator)?;

        let game = Game::new()?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            game,
            canvas,
            event_pump,
            textures,
            paused: false,
            last_tick: Instant::now(),
        })
    }

    /// Runs one frame. Returns false when the application should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                    ..
                } => {
                    info!("Exit requested. Exiting...");
                    return false;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    repeat: false,
                    ..
                } => {
                    self.paused = !self.paused;
                    info!("{}", if self.paused { "Paused" } else { "Unpaused" });
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    self.game.key_down(keycode);
                }
                Event::KeyUp {
                    keycode: Some(keycode), ..
                } => {
                    self.game.key_up(keycode);
                }
                _ => {}
            }
        }

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        if !self.paused {
            self.game.tick(dt);
            if let Err(e) = self.game.draw(&mut self.canvas, &self.textures) {
                error!("Failed to draw game: {e}");
            }
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                platform::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", start.elapsed() - LOOP_TIME);
        }

        true
    }
}
