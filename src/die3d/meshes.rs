//! Die mesh construction
//!
//! Builds the static cube once at startup: 36 vertices, 6 faces of two
//! triangles each, outward counter-clockwise winding. Face identity is
//! baked into the UVs: each face's texcoords live in one column of a
//! horizontal six-slot strip, so the fragment shader recovers the face
//! from `u` alone and never compares normals at runtime.

use bevy::prelude::*;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::asset::RenderAssetUsages;

use crate::die3d::types::Face;

/// Vertex count of the die mesh: 6 faces, two triangles each.
pub const DIE_VERTEX_COUNT: usize = 36;

/// Half-extent of the cube.
const HALF_EXTENT: f32 = 1.0;

/// Corners of a face, counter-clockwise seen from outside, starting at the
/// lower-left when looking straight at the face.
fn face_corners(face: Face) -> [Vec3; 4] {
    let h = HALF_EXTENT;
    match face {
        Face::Right => [
            Vec3::new(h, -h, h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(h, h, h),
        ],
        Face::Left => [
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(-h, h, h),
            Vec3::new(-h, h, -h),
        ],
        Face::Top => [
            Vec3::new(-h, h, h),
            Vec3::new(h, h, h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
        ],
        Face::Bottom => [
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, -h, h),
            Vec3::new(-h, -h, h),
        ],
        Face::Front => [
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ],
        Face::Back => [
            Vec3::new(h, -h, -h),
            Vec3::new(-h, -h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(h, h, -h),
        ],
    }
}

/// Texcoords for the four corners of a face, packed into that face's atlas
/// slot. `v` runs top-down, so the lower corners take `v = 1`.
fn corner_uvs(slot: usize) -> [[f32; 2]; 4] {
    let u0 = slot as f32 / 6.0;
    let u1 = (slot as f32 + 1.0) / 6.0;
    [[u0, 1.0], [u1, 1.0], [u1, 0.0], [u0, 0.0]]
}

/// Build the die cube with positions, per-face normals and atlas UVs.
pub fn create_die_mesh() -> Mesh {
    let mut positions = Vec::with_capacity(DIE_VERTEX_COUNT);
    let mut normals = Vec::with_capacity(DIE_VERTEX_COUNT);
    let mut uvs = Vec::with_capacity(DIE_VERTEX_COUNT);

    for face in Face::ALL {
        let corners = face_corners(face);
        let normal = face.normal();
        // Classifying the built normal (rather than trusting `face`) keeps
        // the tag assignment on the same path a malformed mesh would take.
        let face_uvs = corner_uvs(Face::classify(normal).texture_slot());

        for corner in [0, 1, 2, 0, 2, 3] {
            positions.push(corners[corner].to_array());
            normals.push(normal.to_array());
            uvs.push(face_uvs[corner]);
        }
    }

    let indices: Vec<u32> = (0..DIE_VERTEX_COUNT as u32).collect();

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}
