//! Generates the six die face textures as PNGs under `assets/textures/`.
//!
//! Run once before the first launch:
//!
//! ```text
//! cargo run --bin gen_die_faces
//! ```
//!
//! The app tolerates missing textures (faces render with the white
//! fallback), so this is a convenience, not a hard requirement.

use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

const FACE_SIZE: u32 = 256;
const BORDER_WIDTH: u32 = 4;
const PIP_RADIUS: f32 = 24.0;

const FACE_COLOR: Rgba<u8> = Rgba([245, 242, 232, 255]);
const BORDER_COLOR: Rgba<u8> = Rgba([40, 40, 40, 255]);
const PIP_COLOR: Rgba<u8> = Rgba([25, 25, 25, 255]);

fn main() {
    let out_dir = PathBuf::from("assets/textures");
    fs::create_dir_all(&out_dir).expect("create output dir");

    for value in 1u32..=6 {
        let face = build_face(value);
        write_png(&out_dir.join(format!("die{}.png", value)), &face);
    }

    println!("Wrote die face textures to {}", out_dir.display());
}

fn write_png(path: &Path, image: &RgbaImage) {
    image
        .save(path)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
}

/// Pip centers for each value, on a unit square.
fn pip_layout(value: u32) -> Vec<(f32, f32)> {
    const C: f32 = 0.5;
    const LO: f32 = 0.27;
    const HI: f32 = 0.73;
    match value {
        1 => vec![(C, C)],
        2 => vec![(LO, LO), (HI, HI)],
        3 => vec![(LO, LO), (C, C), (HI, HI)],
        4 => vec![(LO, LO), (HI, LO), (LO, HI), (HI, HI)],
        5 => vec![(LO, LO), (HI, LO), (C, C), (LO, HI), (HI, HI)],
        _ => vec![(LO, LO), (HI, LO), (LO, C), (HI, C), (LO, HI), (HI, HI)],
    }
}

fn build_face(value: u32) -> RgbaImage {
    let mut face = RgbaImage::from_pixel(FACE_SIZE, FACE_SIZE, FACE_COLOR);
    draw_border(&mut face);
    for (cx, cy) in pip_layout(value) {
        draw_pip(&mut face, cx * FACE_SIZE as f32, cy * FACE_SIZE as f32);
    }
    face
}

/// Thin dark frame so the faces read as separate while the die tumbles.
fn draw_border(face: &mut RgbaImage) {
    for y in 0..FACE_SIZE {
        for x in 0..FACE_SIZE {
            let on_edge = x < BORDER_WIDTH
                || y < BORDER_WIDTH
                || x >= FACE_SIZE - BORDER_WIDTH
                || y >= FACE_SIZE - BORDER_WIDTH;
            if on_edge {
                face.put_pixel(x, y, BORDER_COLOR);
            }
        }
    }
}

fn draw_pip(face: &mut RgbaImage, cx: f32, cy: f32) {
    let x0 = (cx - PIP_RADIUS).floor().max(0.0) as u32;
    let y0 = (cy - PIP_RADIUS).floor().max(0.0) as u32;
    let x1 = ((cx + PIP_RADIUS).ceil() as u32).min(FACE_SIZE - 1);
    let y1 = ((cy + PIP_RADIUS).ceil() as u32).min(FACE_SIZE - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= PIP_RADIUS * PIP_RADIUS {
                face.put_pixel(x, y, PIP_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pip_counts_match_values() {
        for value in 1..=6 {
            assert_eq!(pip_layout(value).len(), value as usize);
        }
    }

    #[test]
    fn test_pips_stay_inside_the_face() {
        let margin = PIP_RADIUS / FACE_SIZE as f32;
        for value in 1..=6 {
            for (cx, cy) in pip_layout(value) {
                assert!(cx - margin > 0.0 && cx + margin < 1.0);
                assert!(cy - margin > 0.0 && cy + margin < 1.0);
            }
        }
    }
}
