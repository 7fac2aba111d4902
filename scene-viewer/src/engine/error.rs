use thiserror::Error;

/// Failures surfaced while assembling the scene.
///
/// None of these are retried. A failed environment load leaves the viewer with
/// lighting, sky and camera only; a failed model load leaves an empty placement
/// node; an invalid manifest falls back to the built-in defaults.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to load environment asset `{path}`: {reason}")]
    EnvironmentLoad { path: String, reason: String },

    #[error("failed to load spawned model `{path}`: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("invalid viewer manifest: {0}")]
    InvalidManifest(String),
}
