//! Game-over transitions and error reporting.

use bevy_ecs::{
    entity::Entity,
    event::EventReader,
    query::With,
    system::{Commands, Query, ResMut},
};
use tracing::{info, warn};

use crate::error::GameError;
use crate::events::GameEvent;
use crate::systems::components::{Frozen, GameStatus, PlayerControlled};

/// Applies terminal events: flips [`GameStatus`] exactly once and freezes
/// the player in place.
pub fn game_state_system(
    mut commands: Commands,
    mut status: ResMut<GameStatus>,
    mut events: EventReader<GameEvent>,
    players: Query<Entity, With<PlayerControlled>>,
) {
    for event in events.read() {
        if status.is_over() {
            break;
        }
        match event {
            GameEvent::PlayerDied => {
                *status = GameStatus::GameOver { won: false };
                info!("player died, game over");
            }
            GameEvent::BossDefeated => {
                *status = GameStatus::GameOver { won: true };
                info!("boss defeated, victory");
            }
        }
        for player in players.iter() {
            commands.entity(player).insert(Frozen);
        }
    }
}

/// Drains error events raised by systems and logs them.
pub fn error_report_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        warn!(%error, "system reported an error");
    }
}
