use bevy_ecs::event::Event;

/// Gameplay events emitted by the combat systems and consumed by the
/// game-state system.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player's health reached zero.
    PlayerDied,
    /// The boss's health reached zero and its death sequence completed.
    BossDefeated,
}
