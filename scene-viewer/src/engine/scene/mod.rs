//! Scene content driven by the environment bounds.

/// Static ambient and directional lights and the sky backdrop.
pub mod lighting;

/// Secondary model placement on the environment's ground plane.
pub mod spawner;
