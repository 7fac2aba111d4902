use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::paths::VIEWER_MANIFEST_PATH;

use crate::engine::assets::viewer_manifest::{ViewerManifest, ViewerSettings};
use crate::engine::core::app_state::AppState;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::spawner::SpawnRng;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<ViewerManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(VIEWER_MANIFEST_PATH));
}

/// Turn the manifest into settings, or fall back to defaults when it is
/// missing or invalid. Returns `None` while the manifest is still loading.
pub fn resolve_manifest(
    manifest: Option<&ViewerManifest>,
    load_failed: bool,
) -> Option<ViewerSettings> {
    match manifest {
        Some(manifest) => match manifest.validate() {
            Ok(settings) => Some(settings),
            Err(err) => {
                warn!("{err}; using built-in defaults");
                Some(ViewerSettings::default())
            }
        },
        None if load_failed => {
            warn!("No usable viewer manifest at {VIEWER_MANIFEST_PATH}; using built-in defaults");
            Some(ViewerSettings::default())
        }
        None => None,
    }
}

// Resolve settings and hand over to environment loading
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let load_failed = matches!(asset_server.load_state(handle), LoadState::Failed(_));
    let Some(settings) = resolve_manifest(manifests.get(handle), load_failed) else {
        return;
    };

    info!(
        "✓ Viewer settings resolved (environment: {}, model: {}, orbit distance: {})",
        settings.environment_path, settings.spawned_model_path, settings.orbit_distance
    );

    commands.insert_resource(SpawnRng::new(settings.spawn_seed));
    commands.insert_resource(settings);
    loading_progress.manifest_resolved = true;
    next_state.set(AppState::LoadingEnvironment);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_while_manifest_is_loading() {
        assert_eq!(resolve_manifest(None, false), None);
    }

    #[test]
    fn missing_manifest_falls_back_to_defaults() {
        assert_eq!(resolve_manifest(None, true), Some(ViewerSettings::default()));
    }

    #[test]
    fn invalid_manifest_falls_back_to_defaults() {
        let manifest = ViewerManifest {
            environment_path: String::new(),
            spawned_model_path: "1.glb".to_string(),
            orbit: None,
            spawn_seed: Some(3),
        };
        assert_eq!(
            resolve_manifest(Some(&manifest), false),
            Some(ViewerSettings::default())
        );
    }
}
