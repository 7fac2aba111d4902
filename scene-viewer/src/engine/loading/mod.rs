//! Asset loading for the viewer.
//!
//! The manifest resolves first, then the environment loads, is recentred on
//! the origin and has its bounds published for the rest of the scene.

/// Environment scene loading, recentring and bounds publication.
pub mod environment_loader;

/// Paired glTF file and scene handles with failure detection.
pub mod gltf_scene;

/// Viewer manifest loading with fallback to built-in defaults.
pub mod manifest_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
