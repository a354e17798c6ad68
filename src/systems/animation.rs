//! The player's animation state machine.
//!
//! Animations are rows of a fixed-grid sprite sheet. Looping animations wrap;
//! one-shot animations play to completion, cannot be pre-empted, and then
//! revert to idle.

use bevy_ecs::{
    component::Component,
    query::Without,
    system::{Query, Res},
};
use strum_macros::{Display, EnumIter};

use crate::constants::{PLAYER_FRAME_COUNTS, PLAYER_FRAME_TIME};
use crate::systems::components::{DeltaTime, Frozen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum AnimationKind {
    Idle,
    Run,
    Jump,
}

impl AnimationKind {
    /// Sprite sheet row holding this animation.
    pub fn row(self) -> usize {
        match self {
            AnimationKind::Idle => 0,
            AnimationKind::Run => 1,
            AnimationKind::Jump => 2,
        }
    }

    pub fn frame_count(self) -> usize {
        PLAYER_FRAME_COUNTS[self.row()]
    }

    pub fn looping(self) -> bool {
        !matches!(self, AnimationKind::Jump)
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SpriteAnimation {
    kind: AnimationKind,
    frame: usize,
    timer: f32,
    one_shot_active: bool,
}

impl Default for SpriteAnimation {
    fn default() -> Self {
        Self {
            kind: AnimationKind::Idle,
            frame: 0,
            timer: 0.0,
            one_shot_active: false,
        }
    }
}

impl SpriteAnimation {
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn is_one_shot_active(&self) -> bool {
        self.one_shot_active
    }

    /// Requests a new animation. Ignored while a one-shot is playing, and a
    /// no-op when the animation is already active.
    pub fn request(&mut self, kind: AnimationKind) {
        if self.one_shot_active {
            return;
        }
        if self.kind != kind {
            self.kind = kind;
            self.frame = 0;
            self.one_shot_active = !kind.looping();
        }
    }

    /// Advances the frame timer; wraps looping animations and reverts
    /// completed one-shots to idle.
    pub fn advance(&mut self, delta: f32) {
        self.timer += delta;
        if self.timer < PLAYER_FRAME_TIME {
            return;
        }
        self.timer = 0.0;
        self.frame += 1;
        if self.frame >= self.kind.frame_count() {
            if self.kind.looping() {
                self.frame = 0;
            } else {
                self.one_shot_active = false;
                self.kind = AnimationKind::Idle;
                self.frame = 0;
            }
        }
    }
}

pub fn animation_system(delta_time: Res<DeltaTime>, mut animations: Query<&mut SpriteAnimation, Without<Frozen>>) {
    for mut animation in animations.iter_mut() {
        animation.advance(delta_time.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rows_exist_in_sheet() {
        for kind in AnimationKind::iter() {
            assert!(kind.row() < PLAYER_FRAME_COUNTS.len());
            assert!(kind.frame_count() > 0);
        }
    }

    #[test]
    fn test_one_shot_lock() {
        let mut animation = SpriteAnimation::default();
        animation.request(AnimationKind::Jump);
        assert!(animation.is_one_shot_active());

        // Requests are ignored until the one-shot completes
        animation.request(AnimationKind::Run);
        assert_eq!(animation.kind(), AnimationKind::Jump);
    }

    #[test]
    fn test_one_shot_reverts_to_idle() {
        let mut animation = SpriteAnimation::default();
        animation.request(AnimationKind::Jump);
        for _ in 0..AnimationKind::Jump.frame_count() {
            animation.advance(PLAYER_FRAME_TIME);
        }
        assert_eq!(animation.kind(), AnimationKind::Idle);
        assert!(!animation.is_one_shot_active());
    }

    #[test]
    fn test_looping_wraps() {
        let mut animation = SpriteAnimation::default();
        animation.request(AnimationKind::Run);
        for _ in 0..AnimationKind::Run.frame_count() {
            animation.advance(PLAYER_FRAME_TIME);
        }
        assert_eq!(animation.kind(), AnimationKind::Run);
        assert_eq!(animation.frame(), 0);
    }

    #[test]
    fn test_rerequesting_same_kind_keeps_frame() {
        let mut animation = SpriteAnimation::default();
        animation.request(AnimationKind::Run);
        animation.advance(PLAYER_FRAME_TIME);
        assert_eq!(animation.frame(), 1);
        animation.request(AnimationKind::Run);
        assert_eq!(animation.frame(), 1);
    }
}
