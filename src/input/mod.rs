//! Keyboard bindings and the per-tick input snapshot the simulation reads.

use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use sdl2::keyboard::Keycode;

/// A player-facing action a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    Jump,
    Shoot,
}

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    actions: HashMap<Keycode, PlayerAction>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut actions = HashMap::new();

        actions.insert(Keycode::A, PlayerAction::MoveLeft);
        actions.insert(Keycode::Left, PlayerAction::MoveLeft);
        actions.insert(Keycode::D, PlayerAction::MoveRight);
        actions.insert(Keycode::Right, PlayerAction::MoveRight);
        actions.insert(Keycode::Space, PlayerAction::Jump);
        actions.insert(Keycode::E, PlayerAction::Shoot);

        Self { actions }
    }
}

impl Bindings {
    pub fn action(&self, key: Keycode) -> Option<PlayerAction> {
        self.actions.get(&key).copied()
    }
}

/// The input state the character controller consumes each tick.
///
/// `left`/`right` are level-triggered (held keys); `jump`/`shoot` are
/// edge-triggered and cleared after every tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

impl PlayerInput {
    pub fn apply_key_down(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::MoveLeft => self.left = true,
            PlayerAction::MoveRight => self.right = true,
            PlayerAction::Jump => self.jump = true,
            PlayerAction::Shoot => self.shoot = true,
        }
    }

    pub fn apply_key_up(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::MoveLeft => self.left = false,
            PlayerAction::MoveRight => self.right = false,
            // Edge-triggered actions expire on their own
            PlayerAction::Jump | PlayerAction::Shoot => {}
        }
    }

    /// Clears the edge-triggered flags. Called once per tick after the
    /// simulation has consumed them.
    pub fn clear_edges(&mut self) {
        self.jump = false;
        self.shoot = false;
    }
}
