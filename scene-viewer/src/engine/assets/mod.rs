//! Scene data shared between loading, spawning and camera systems.

/// World-space bounding boxes and the published environment bounds.
pub mod bounds;

/// JSON viewer manifest and the resolved viewer settings.
pub mod viewer_manifest;
