//! Scene setup system
//!
//! Spawns the camera, the die, and the HUD, and starts the six face-texture
//! loads. The die starts with an all-fallback material and picks up its
//! textures as they stream in.

use bevy::prelude::*;

use crate::die3d::face_material::DieFaceMaterial;
use crate::die3d::meshes::create_die_mesh;
use crate::die3d::types::*;

use super::textures::FaceTextures;

/// How far the camera sits from the die along +Z.
const CAMERA_DISTANCE: f32 = 6.0;

pub fn setup(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<DieFaceMaterial>>,
    lighting: Res<LightingState>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Mesh3d(meshes.add(create_die_mesh())),
        MeshMaterial3d(materials.add(DieFaceMaterial::from_lighting(&lighting))),
        Transform::default(),
        Die,
    ));

    commands.insert_resource(FaceTextures::start_loading(&asset_server));

    // HUD - score at the top, controls hint at the bottom
    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));

    commands.spawn((
        Text::new("SPACE roll | A/Z ambient | S/X diffuse | D/C specular | mouse steers the light"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 0.7, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}
