//! Rotation state machine and roll planning
//!
//! The die is always animating in one of two states. Idle: a slow constant
//! tumble on both axes. Rolling: both axes race independently toward
//! randomized targets chosen so the drawn face ends up toward the viewer,
//! plus up to two full turns of overshoot per axis for visual effect.
//!
//! The machine is plain data advanced by [`RotationState::tick`], so the
//! whole roll lifecycle is testable without a window or render context.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Angular advance per frame, in radians.
pub const ROTATION_SPEED: f32 = 0.005;

/// Upper bound of the random overshoot added per axis (two full turns).
pub const OVERSHOOT_MAX: f32 = PI * 4.0;

/// Marker component for the die entity.
#[derive(Component)]
pub struct Die;

/// Source of roll randomness, seedable for reproducible sessions.
#[derive(Resource)]
pub struct RollRng(pub StdRng);

impl RollRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self(rng)
    }
}

/// Base rotation offset that brings `outcome`'s face toward the viewer.
///
/// Outcomes outside 1..=6 yield a zero offset; [`RollPlan::generate`] never
/// produces one.
pub fn base_target_offset(outcome: u32) -> Vec2 {
    match outcome {
        1 => Vec2::new(0.0, 0.0),
        2 => Vec2::new(PI / 2.0, 0.0),
        3 => Vec2::new(PI, 0.0),
        4 => Vec2::new(-PI / 2.0, 0.0),
        5 => Vec2::new(0.0, PI / 2.0),
        6 => Vec2::new(0.0, -PI / 2.0),
        _ => Vec2::ZERO,
    }
}

/// A planned roll: the drawn outcome plus per-axis overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollPlan {
    pub outcome: u32,
    pub extra: Vec2,
}

impl RollPlan {
    /// Draw a fresh plan from `rng`: outcome uniform in 1..=6, overshoot
    /// uniform in [0, 4 pi) per axis.
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            outcome: rng.gen_range(1..=6),
            extra: Vec2::new(
                rng.gen_range(0.0..OVERSHOOT_MAX),
                rng.gen_range(0.0..OVERSHOOT_MAX),
            ),
        }
    }

    /// Total rotation to add on top of the current angles.
    pub fn target_offset(&self) -> Vec2 {
        base_target_offset(self.outcome) + self.extra
    }
}

/// Rotation state of the die, advanced once per frame.
///
/// Angles accumulate without wrapping. The trig downstream is periodic so
/// normalization buys nothing, and monotonic angles are what keep the roll
/// targets reachable.
#[derive(Resource, Debug, Clone)]
pub struct RotationState {
    pub current: Vec2,
    pub target: Vec2,
    pub rolling: bool,
    outcome: Option<u32>,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            rolling: false,
            outcome: None,
        }
    }
}

impl RotationState {
    /// Accept a roll request. Returns `false` and changes nothing while a
    /// roll is already in flight; at most one roll runs at a time.
    pub fn try_start_roll(&mut self, plan: RollPlan) -> bool {
        if self.rolling {
            return false;
        }
        self.target = self.current + plan.target_offset();
        self.outcome = Some(plan.outcome);
        self.rolling = true;
        true
    }

    /// Advance the machine by one frame.
    ///
    /// Idle: both axes gain `speed`. Rolling: each axis gains `speed` while
    /// still short of its target, so the axes may land on different frames.
    /// Once both have landed the machine returns to Idle and yields the
    /// outcome exactly once.
    pub fn tick(&mut self, speed: f32) -> Option<u32> {
        if !self.rolling {
            self.current.x += speed;
            self.current.y += speed;
            return None;
        }

        if self.current.x < self.target.x {
            self.current.x += speed;
        }
        if self.current.y < self.target.y {
            self.current.y += speed;
        }

        if self.current.x >= self.target.x && self.current.y >= self.target.y {
            self.rolling = false;
            return self.outcome.take();
        }
        None
    }

    /// Orientation for the current angles. Y-rotation is applied after
    /// X-rotation, matching the model matrix the targets were derived for.
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.current.y) * Quat::from_rotation_x(self.current.x)
    }
}
