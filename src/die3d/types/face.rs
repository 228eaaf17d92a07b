//! Cube face identity and normal classification
//!
//! A face is identified by the axis-aligned unit normal it was built with.
//! Classification runs once, at mesh build time; the resulting texture slot
//! is baked into the vertex UVs so the shader never compares normals.

use bevy::prelude::*;

/// Tolerance for matching a normal against an axis-aligned unit vector.
pub const FACE_NORMAL_EPSILON: f32 = 0.001;

/// One of the six faces of the die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Classify a unit normal into a face.
    ///
    /// Checks +X, -X, +Y, -Y, +Z in that order within
    /// [`FACE_NORMAL_EPSILON`] of the canonical value; anything else falls
    /// back to `Back`. Cube face normals are exactly axis-aligned, so the
    /// check order only matters for degenerate input, which silently lands
    /// on the back face.
    pub fn classify(normal: Vec3) -> Face {
        if (normal.x - 1.0).abs() < FACE_NORMAL_EPSILON {
            Face::Right
        } else if (normal.x + 1.0).abs() < FACE_NORMAL_EPSILON {
            Face::Left
        } else if (normal.y - 1.0).abs() < FACE_NORMAL_EPSILON {
            Face::Top
        } else if (normal.y + 1.0).abs() < FACE_NORMAL_EPSILON {
            Face::Bottom
        } else if (normal.z - 1.0).abs() < FACE_NORMAL_EPSILON {
            Face::Front
        } else {
            Face::Back
        }
    }

    /// Outward unit normal of this face.
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Right => Vec3::X,
            Face::Left => Vec3::NEG_X,
            Face::Top => Vec3::Y,
            Face::Bottom => Vec3::NEG_Y,
            Face::Front => Vec3::Z,
            Face::Back => Vec3::NEG_Z,
        }
    }

    /// Texture slot of this face, which is also its column in the UV atlas
    /// strip. Slot 0 shows `die1.png`, slot 5 shows `die6.png`.
    pub fn texture_slot(self) -> usize {
        match self {
            Face::Right => 0,
            Face::Left => 1,
            Face::Top => 2,
            Face::Bottom => 3,
            Face::Front => 4,
            Face::Back => 5,
        }
    }

    /// Pip value shown by this face's texture.
    pub fn value(self) -> u32 {
        self.texture_slot() as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_classify_canonical_normals() {
        assert_eq!(Face::classify(Vec3::X), Face::Right);
        assert_eq!(Face::classify(Vec3::NEG_X), Face::Left);
        assert_eq!(Face::classify(Vec3::Y), Face::Top);
        assert_eq!(Face::classify(Vec3::NEG_Y), Face::Bottom);
        assert_eq!(Face::classify(Vec3::Z), Face::Front);
        assert_eq!(Face::classify(Vec3::NEG_Z), Face::Back);
    }

    #[test]
    fn test_classify_is_unique_per_normal() {
        let faces: HashSet<Face> = Face::ALL
            .iter()
            .map(|face| Face::classify(face.normal()))
            .collect();
        assert_eq!(faces.len(), 6, "no two normals may map to the same face");
    }

    #[test]
    fn test_classify_round_trips() {
        for face in Face::ALL {
            assert_eq!(Face::classify(face.normal()), face);
        }
    }

    #[test]
    fn test_classify_tolerates_small_error() {
        assert_eq!(Face::classify(Vec3::new(0.9995, 0.0, 0.0)), Face::Right);
        assert_eq!(Face::classify(Vec3::new(0.0, -0.9995, 0.0)), Face::Bottom);
    }

    #[test]
    fn test_classify_degenerate_falls_back_to_back() {
        assert_eq!(Face::classify(Vec3::ZERO), Face::Back);
        assert_eq!(Face::classify(Vec3::new(0.5, 0.5, 0.5)), Face::Back);
    }

    #[test]
    fn test_texture_slots_cover_all_values() {
        let mut slots: Vec<usize> = Face::ALL.iter().map(|f| f.texture_slot()).collect();
        slots.sort();
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_face_values() {
        assert_eq!(Face::Right.value(), 1);
        assert_eq!(Face::Back.value(), 6);
    }
}
