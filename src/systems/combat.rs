//! Player/boss contact damage and terminal-condition evaluation.

use bevy_ecs::{
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use tracing::debug;

use crate::constants::CONTACT_DAMAGE;
use crate::events::GameEvent;
use crate::systems::boss::{Boss, DeathSequence};
use crate::systems::components::{Body, ContactState, GameStatus, Health, PlayerControlled, Position};

/// Applies contact damage on the rising edge of player/boss overlap.
/// Sustained contact damages once, not every tick.
#[allow(clippy::type_complexity)]
pub fn contact_damage_system(
    mut contact: ResMut<ContactState>,
    mut players: Query<(&Position, &Body, &mut Health), (With<PlayerControlled>, Without<Boss>)>,
    bosses: Query<(&Position, &Body, &DeathSequence), With<Boss>>,
) {
    let Ok((player_position, player_body, mut player_health)) = players.single_mut() else {
        return;
    };
    let Ok((boss_position, boss_body, death)) = bosses.single() else {
        return;
    };

    // The boss's body stops colliding once its death sequence has completed
    if death.finished {
        return;
    }

    let colliding = boss_body
        .rect(boss_position)
        .intersects(&player_body.rect(player_position));
    if colliding && !contact.was_colliding {
        player_health.damage(CONTACT_DAMAGE);
        debug!(remaining = player_health.current(), "boss contact damaged player");
    }
    contact.was_colliding = colliding;
}

/// Evaluates win/loss. The boss must finish its death sequence before the
/// session counts as won.
pub fn terminal_state_system(
    status: Res<GameStatus>,
    mut events: EventWriter<GameEvent>,
    players: Query<&Health, With<PlayerControlled>>,
    bosses: Query<(&Health, &DeathSequence), With<Boss>>,
) {
    if status.is_over() {
        return;
    }
    let Ok(player_health) = players.single() else {
        return;
    };
    let Ok((boss_health, death)) = bosses.single() else {
        return;
    };

    if player_health.is_depleted() {
        events.write(GameEvent::PlayerDied);
    } else if boss_health.is_depleted() && death.finished {
        events.write(GameEvent::BossDefeated);
    }
}
