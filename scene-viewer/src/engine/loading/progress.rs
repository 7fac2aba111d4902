use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub environment_failed: bool,
    pub environment_published: bool,
}
