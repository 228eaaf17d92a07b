//! Lighting coefficients and cursor-to-light mapping
//!
//! The shading model takes three scalar coefficients and a point light
//! position. Keys step the coefficients; the cursor steers the light across
//! a fixed-depth plane in front of the die.

use bevy::prelude::*;

/// Per-keypress adjustment applied to a lighting coefficient.
pub const LIGHTING_STEP: f32 = 0.05;

/// Fixed light depth; the cursor only steers X and Y.
pub const LIGHT_Z: f32 = 5.0;

/// Half-width of the region the cursor maps onto, in world units.
const LIGHT_RANGE: f32 = 5.0;

const AMBIENT_MAX: f32 = 1.0;
const DIFFUSE_MAX: f32 = 5.0;
const SPECULAR_MAX: f32 = 5.0;

/// Map a cursor position inside the viewport to a light position.
///
/// The top-left corner maps to (-5, -5, 5) and the bottom-right corner to
/// (5, 5, 5); screen Y carries straight into world Y.
pub fn light_position_for_cursor(cursor: Vec2, viewport: Vec2) -> Vec3 {
    let x = (cursor.x / viewport.x) * (LIGHT_RANGE * 2.0) - LIGHT_RANGE;
    let y = (cursor.y / viewport.y) * (LIGHT_RANGE * 2.0) - LIGHT_RANGE;
    Vec3::new(x, y, LIGHT_Z)
}

/// Mutable lighting inputs read by the die material every frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightingState {
    /// Ambient coefficient in [0, 1].
    pub ambient: f32,
    /// Diffuse coefficient in [0, 5].
    pub diffuse: f32,
    /// Specular coefficient in [0, 5].
    pub specular: f32,
    pub light_position: Vec3,
}

impl Default for LightingState {
    fn default() -> Self {
        Self {
            ambient: 0.3,
            diffuse: 0.7,
            specular: 1.0,
            light_position: Vec3::new(5.0, 5.0, LIGHT_Z),
        }
    }
}

impl LightingState {
    pub fn adjust_ambient(&mut self, delta: f32) {
        self.ambient = (self.ambient + delta).clamp(0.0, AMBIENT_MAX);
    }

    pub fn adjust_diffuse(&mut self, delta: f32) {
        self.diffuse = (self.diffuse + delta).clamp(0.0, DIFFUSE_MAX);
    }

    pub fn adjust_specular(&mut self, delta: f32) {
        self.specular = (self.specular + delta).clamp(0.0, SPECULAR_MAX);
    }
}
