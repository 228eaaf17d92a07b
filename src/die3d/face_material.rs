//! Die face material: one texture per face plus Phong-style lighting.

use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderType};
use bevy::shader::ShaderRef;

use crate::die3d::types::{Face, LightingState};

pub const DIE_FACE_SHADER: &str = "shaders/die_face.wgsl";

/// GPU lighting parameters, refreshed whenever [`LightingState`] changes.
#[derive(Clone, Copy, Debug, Default, ShaderType, Reflect)]
pub struct FaceLightingParams {
    pub light_position: Vec3,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    /// Padding for alignment.
    pub _pad: Vec2,
}

impl FaceLightingParams {
    pub fn set_from(&mut self, lighting: &LightingState) {
        self.light_position = lighting.light_position;
        self.ambient = lighting.ambient;
        self.diffuse = lighting.diffuse;
        self.specular = lighting.specular;
    }
}

/// Material for the die. One texture per face, selected in the shader from
/// the atlas column baked into the UVs. A slot left empty renders with the
/// renderer's built-in white fallback image until its texture arrives.
#[derive(Asset, AsBindGroup, Reflect, Debug, Clone, Default)]
pub struct DieFaceMaterial {
    #[uniform(0)]
    pub params: FaceLightingParams,
    #[texture(1)]
    #[sampler(2)]
    pub face_right: Option<Handle<Image>>,
    #[texture(3)]
    #[sampler(4)]
    pub face_left: Option<Handle<Image>>,
    #[texture(5)]
    #[sampler(6)]
    pub face_top: Option<Handle<Image>>,
    #[texture(7)]
    #[sampler(8)]
    pub face_bottom: Option<Handle<Image>>,
    #[texture(9)]
    #[sampler(10)]
    pub face_front: Option<Handle<Image>>,
    #[texture(11)]
    #[sampler(12)]
    pub face_back: Option<Handle<Image>>,
}

impl DieFaceMaterial {
    pub fn from_lighting(lighting: &LightingState) -> Self {
        let mut material = Self::default();
        material.params.set_from(lighting);
        material
    }

    /// Bind `image` as the texture of `face`.
    pub fn set_face_texture(&mut self, face: Face, image: Handle<Image>) {
        match face {
            Face::Right => self.face_right = Some(image),
            Face::Left => self.face_left = Some(image),
            Face::Top => self.face_top = Some(image),
            Face::Bottom => self.face_bottom = Some(image),
            Face::Front => self.face_front = Some(image),
            Face::Back => self.face_back = Some(image),
        }
    }
}

impl Material for DieFaceMaterial {
    fn fragment_shader() -> ShaderRef {
        DIE_FACE_SHADER.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_mirror_lighting_state() {
        let lighting = LightingState {
            ambient: 0.25,
            diffuse: 1.5,
            specular: 2.0,
            light_position: Vec3::new(1.0, -2.0, 5.0),
        };
        let material = DieFaceMaterial::from_lighting(&lighting);
        assert_eq!(material.params.ambient, 0.25);
        assert_eq!(material.params.diffuse, 1.5);
        assert_eq!(material.params.specular, 2.0);
        assert_eq!(material.params.light_position, lighting.light_position);
    }

    #[test]
    fn test_every_face_slot_starts_empty() {
        let material = DieFaceMaterial::default();
        assert!(material.face_right.is_none());
        assert!(material.face_left.is_none());
        assert!(material.face_top.is_none());
        assert!(material.face_bottom.is_none());
        assert!(material.face_front.is_none());
        assert!(material.face_back.is_none());
    }

    #[test]
    fn test_set_face_texture_fills_the_right_slot() {
        let mut material = DieFaceMaterial::default();
        material.set_face_texture(Face::Top, Handle::default());
        assert!(material.face_top.is_some());
        assert!(material.face_front.is_none());
    }
}
