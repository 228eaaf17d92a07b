//! Type definitions for the tumbling-die roller
//!
//! This module is organized into submodules:
//! - `face` - cube face identity and normal classification
//! - `lighting` - lighting coefficients and cursor-to-light mapping
//! - `roll` - rotation state machine and roll planning
//! - `score` - score accumulation and timing
//! - `settings` - tunable settings and persistence
//! - `ui` - HUD marker components

pub mod face;
pub mod lighting;
pub mod roll;
pub mod score;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use face::*;
pub use lighting::*;
pub use roll::*;
pub use score::*;
pub use settings::*;
pub use ui::*;
