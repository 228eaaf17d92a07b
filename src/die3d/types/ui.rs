//! HUD marker components

use bevy::prelude::*;

/// Marker for the score readout text.
#[derive(Component)]
pub struct ScoreText;
