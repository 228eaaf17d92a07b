//! Asynchronous face-texture loading
//!
//! Textures stream in while the die is already rendering. A face keeps the
//! white fallback until its image arrives; a failed load is reported once
//! and that face stays on the fallback for the rest of the session.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::die3d::face_material::DieFaceMaterial;
use crate::die3d::types::{Die, Face};

/// Image paths in face order (right, left, top, bottom, front, back).
pub const FACE_TEXTURE_PATHS: [&str; 6] = [
    "textures/die1.png",
    "textures/die2.png",
    "textures/die3.png",
    "textures/die4.png",
    "textures/die5.png",
    "textures/die6.png",
];

/// Tracks the in-flight face-texture loads.
#[derive(Resource)]
pub struct FaceTextures {
    handles: [Handle<Image>; 6],
    applied: [bool; 6],
    failed: [bool; 6],
}

impl FaceTextures {
    /// Kick off all six loads.
    pub fn start_loading(asset_server: &AssetServer) -> Self {
        Self {
            handles: std::array::from_fn(|slot| asset_server.load(FACE_TEXTURE_PATHS[slot])),
            applied: [false; 6],
            failed: [false; 6],
        }
    }
}

/// Swap finished texture loads into the die material.
pub fn sync_face_textures(
    asset_server: Res<AssetServer>,
    mut textures: ResMut<FaceTextures>,
    die_query: Query<&MeshMaterial3d<DieFaceMaterial>, With<Die>>,
    mut materials: ResMut<Assets<DieFaceMaterial>>,
) {
    for face in Face::ALL {
        let slot = face.texture_slot();
        if textures.applied[slot] || textures.failed[slot] {
            continue;
        }

        match asset_server.get_load_state(&textures.handles[slot]) {
            Some(LoadState::Loaded) => {
                for material_handle in die_query.iter() {
                    if let Some(material) = materials.get_mut(&material_handle.0) {
                        material.set_face_texture(face, textures.handles[slot].clone());
                    }
                }
                textures.applied[slot] = true;
            }
            Some(LoadState::Failed(error)) => {
                error!(
                    "Failed to load face texture {}: {}",
                    FACE_TEXTURE_PATHS[slot], error
                );
                textures.failed[slot] = true;
            }
            _ => {}
        }
    }
}
