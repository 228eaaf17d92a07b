//! Die animation and score display systems

use bevy::prelude::*;

use crate::die3d::types::*;

/// Advance the rotation engine by one frame and pose the die.
///
/// Runs unconditionally: the idle tumble and the roll animation both move
/// through here. A roll that lands this frame settles the score when the
/// timing is `Settle`.
pub fn advance_die(
    settings: Res<RollSettings>,
    mut rotation: ResMut<RotationState>,
    mut score: ResMut<Score>,
    mut die_query: Query<&mut Transform, With<Die>>,
) {
    if let Some(outcome) = rotation.tick(settings.rotation_speed) {
        info!("Die settled on {}", outcome);
        if settings.score_timing == ScoreTiming::Settle {
            score.add(outcome);
        }
    }

    for mut transform in die_query.iter_mut() {
        transform.rotation = rotation.orientation();
    }
}

/// Keep the HUD score text current.
pub fn update_score_display(score: Res<Score>, mut text_query: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = format!("Score: {}", score.total);
    }
}
