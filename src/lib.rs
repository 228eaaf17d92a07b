pub mod die3d;
