//! Systems for the tumbling-die roller
//!
//! - `setup`: scene initialization (camera, die, HUD, texture loads)
//! - `die`: rotation engine ticking and score display
//! - `input`: roll trigger and lighting keys
//! - `lighting`: cursor-driven light and uniform upload
//! - `textures`: asynchronous face-texture loading

mod die;
mod input;
mod lighting;
mod setup;
mod textures;

// Re-export all public systems
pub use die::{advance_die, update_score_display};
pub use input::{handle_lighting_keys, handle_roll_input};
pub use lighting::{push_lighting, update_light_from_cursor};
pub use setup::setup;
pub use textures::{sync_face_textures, FaceTextures, FACE_TEXTURE_PATHS};
