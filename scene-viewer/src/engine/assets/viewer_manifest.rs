use bevy::prelude::*;
use constants::camera::{ORBIT_DISTANCE, ORBIT_PAN_SPEED, ORBIT_ROTATE_SPEED};
use constants::paths::{ENVIRONMENT_ASSET_PATH, SPAWNED_MODEL_ASSET_PATH};
use serde::{Deserialize, Serialize};

use crate::engine::error::SceneError;

/// Orbit overrides. Omitted fields keep the built-in values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitManifest {
    #[serde(default = "default_orbit_distance")]
    pub distance: f32,
    #[serde(default = "default_pan_speed")]
    pub pan_speed: f32,
    #[serde(default = "default_rotate_speed")]
    pub rotate_speed: f32,
}

/// Viewer manifest as a Bevy asset. Mirrors the JSON structure exactly.
#[derive(Asset, TypePath, Debug, Clone, Serialize, Deserialize)]
pub struct ViewerManifest {
    #[serde(default = "default_environment_path")]
    pub environment_path: String,
    #[serde(default = "default_spawned_model_path")]
    pub spawned_model_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbit: Option<OrbitManifest>,
    /// Fixes the spawn draw for reproducible scenes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_seed: Option<u64>,
}

fn default_environment_path() -> String {
    ENVIRONMENT_ASSET_PATH.to_string()
}

fn default_spawned_model_path() -> String {
    SPAWNED_MODEL_ASSET_PATH.to_string()
}

fn default_orbit_distance() -> f32 {
    ORBIT_DISTANCE
}

fn default_pan_speed() -> f32 {
    ORBIT_PAN_SPEED
}

fn default_rotate_speed() -> f32 {
    ORBIT_ROTATE_SPEED
}

/// Resolved viewer configuration, available once the manifest step finishes.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub environment_path: String,
    pub spawned_model_path: String,
    pub orbit_distance: f32,
    pub pan_speed: f32,
    pub rotate_speed: f32,
    pub spawn_seed: Option<u64>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            environment_path: default_environment_path(),
            spawned_model_path: default_spawned_model_path(),
            orbit_distance: ORBIT_DISTANCE,
            pan_speed: ORBIT_PAN_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            spawn_seed: None,
        }
    }
}

impl ViewerManifest {
    /// Check the manifest and turn it into settings.
    pub fn validate(&self) -> Result<ViewerSettings, SceneError> {
        if self.environment_path.trim().is_empty() {
            return Err(SceneError::InvalidManifest(
                "environment_path is empty".to_string(),
            ));
        }
        if self.spawned_model_path.trim().is_empty() {
            return Err(SceneError::InvalidManifest(
                "spawned_model_path is empty".to_string(),
            ));
        }

        let defaults = ViewerSettings::default();
        let (orbit_distance, pan_speed, rotate_speed) = match &self.orbit {
            Some(orbit) => {
                for (name, value) in [
                    ("orbit.distance", orbit.distance),
                    ("orbit.pan_speed", orbit.pan_speed),
                    ("orbit.rotate_speed", orbit.rotate_speed),
                ] {
                    if !value.is_finite() || value <= 0.0 {
                        return Err(SceneError::InvalidManifest(format!(
                            "{name} must be a positive number, got {value}"
                        )));
                    }
                }
                (orbit.distance, orbit.pan_speed, orbit.rotate_speed)
            }
            None => (
                defaults.orbit_distance,
                defaults.pan_speed,
                defaults.rotate_speed,
            ),
        };

        Ok(ViewerSettings {
            environment_path: self.environment_path.clone(),
            spawned_model_path: self.spawned_model_path.clone(),
            orbit_distance,
            pan_speed,
            rotate_speed,
            spawn_seed: self.spawn_seed,
        })
    }
}
