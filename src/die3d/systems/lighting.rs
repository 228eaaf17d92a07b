//! Light steering and uniform upload

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::die3d::face_material::DieFaceMaterial;
use crate::die3d::types::*;

/// Follow the cursor with the light.
///
/// Polls the primary window each frame; nothing moves while the cursor is
/// outside the window.
pub fn update_light_from_cursor(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut lighting: ResMut<LightingState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let position = light_position_for_cursor(cursor, viewport);
    if lighting.light_position != position {
        lighting.light_position = position;
    }
}

/// Push lighting changes into the die material.
pub fn push_lighting(
    lighting: Res<LightingState>,
    die_query: Query<&MeshMaterial3d<DieFaceMaterial>, With<Die>>,
    mut materials: ResMut<Assets<DieFaceMaterial>>,
) {
    if !lighting.is_changed() {
        return;
    }
    for material_handle in die_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.params.set_from(&lighting);
        }
    }
}
