pub mod face_material;
pub mod meshes;
pub mod systems;
pub mod types;

pub use face_material::*;
pub use meshes::*;
pub use systems::*;
pub use types::*;
