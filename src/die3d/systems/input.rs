//! Input handling systems
//!
//! Keyboard input for triggering rolls and stepping the lighting
//! coefficients.

use bevy::prelude::*;

use crate::die3d::types::*;

/// Start a roll on SPACE.
///
/// Requests arriving while a roll is in flight are dropped without touching
/// any state, so at most one roll runs at a time.
pub fn handle_roll_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    settings: Res<RollSettings>,
    mut rng: ResMut<RollRng>,
    mut rotation: ResMut<RotationState>,
    mut score: ResMut<Score>,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    if rotation.rolling {
        return;
    }

    let plan = RollPlan::generate(&mut rng.0);
    info!("Rolled a {}", plan.outcome);
    if settings.score_timing == ScoreTiming::Trigger {
        score.add(plan.outcome);
    }
    rotation.try_start_roll(plan);
}

/// Step the lighting coefficients from the keyboard.
pub fn handle_lighting_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut lighting: ResMut<LightingState>,
) {
    if keyboard.just_pressed(KeyCode::KeyA) {
        lighting.adjust_ambient(LIGHTING_STEP);
    }
    if keyboard.just_pressed(KeyCode::KeyZ) {
        lighting.adjust_ambient(-LIGHTING_STEP);
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        lighting.adjust_diffuse(LIGHTING_STEP);
    }
    if keyboard.just_pressed(KeyCode::KeyX) {
        lighting.adjust_diffuse(-LIGHTING_STEP);
    }
    if keyboard.just_pressed(KeyCode::KeyD) {
        lighting.adjust_specular(LIGHTING_STEP);
    }
    if keyboard.just_pressed(KeyCode::KeyC) {
        lighting.adjust_specular(-LIGHTING_STEP);
    }
}
