//! Shared viewer constants.
//!
//! Built-in defaults for asset locations, camera framing, orbit behaviour and
//! the static lighting rig. The viewer manifest can override the asset paths
//! and orbit settings at run time.

pub mod camera;
pub mod lighting;
pub mod paths;
