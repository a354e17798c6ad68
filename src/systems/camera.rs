//! Camera follow: tracks the player's X, ratchets upward on Y, and stays
//! inside the map.

use bevy_ecs::{
    query::With,
    resource::Resource,
    system::{Query, Res, ResMut},
};
use glam::Vec2;

use crate::constants::{CAMERA_ZOOM_PADDING, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::map::Map;
use crate::systems::components::{PlayerControlled, Position};

#[derive(Resource, Debug, Clone, Copy)]
pub struct Camera {
    /// World point the view centers on.
    pub target: Vec2,
    /// Screen-space anchor of the target, in pixels.
    pub offset: Vec2,
    pub zoom: f32,
}

impl Camera {
    /// Centers on `target` with a zoom that fits the map height into the
    /// window, padded.
    pub fn new(target: Vec2, map_height_px: f32) -> Self {
        Self {
            target,
            offset: Vec2::new(DISPLAY_WIDTH as f32 / 2.0, DISPLAY_HEIGHT as f32 / 2.0),
            zoom: DISPLAY_HEIGHT as f32 / map_height_px * CAMERA_ZOOM_PADDING,
        }
    }

    /// World to screen-space transform.
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }
}

pub fn camera_system(map: Res<Map>, mut camera: ResMut<Camera>, players: Query<&Position, With<PlayerControlled>>) {
    let Ok(position) = players.single() else {
        return;
    };

    camera.target.x = position.0.x;
    // Ratchet: the camera follows the player's Y only via a running maximum,
    // never recentering back
    camera.target.y = camera.target.y.max(position.0.y);

    let map_height = map.pixel_size().y;
    let min_y = camera.offset.y / camera.zoom;
    let max_y = map_height - (DISPLAY_HEIGHT as f32 - camera.offset.y) / camera.zoom;
    camera.target.y = camera.target.y.clamp(min_y, max_y);
}
