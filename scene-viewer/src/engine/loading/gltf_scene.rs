use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;

/// A glTF file and the first scene inside it.
///
/// Decode errors only fail the file handle and a missing scene label never
/// fails the scene handle, so both are watched.
#[derive(Debug, Clone, Default)]
pub struct GltfSceneHandles {
    pub gltf: Handle<Gltf>,
    pub scene: Handle<Scene>,
}

impl GltfSceneHandles {
    pub fn load(asset_server: &AssetServer, path: &str) -> Self {
        Self {
            gltf: asset_server.load(path.to_string()),
            scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.to_string())),
        }
    }

    /// Why the file or its scene can no longer arrive, if it can't.
    pub fn failure(&self, asset_server: &AssetServer, gltfs: &Assets<Gltf>) -> Option<String> {
        load_failure(
            [
                asset_server.load_state(&self.gltf),
                asset_server.load_state(&self.scene),
            ],
            gltfs.get(&self.gltf).map(|gltf| gltf.scenes.len()),
        )
    }
}

/// First failed state wins. A decoded file without scenes is a failure too.
pub fn load_failure(
    states: impl IntoIterator<Item = LoadState>,
    scene_count: Option<usize>,
) -> Option<String> {
    let failed = states.into_iter().find_map(|state| match state {
        LoadState::Failed(reason) => Some(reason.to_string()),
        _ => None,
    });

    match (failed, scene_count) {
        (Some(reason), _) => Some(reason),
        (None, Some(0)) => Some("file contains no scenes".to_string()),
        (None, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::asset::AssetLoadError;
    use bevy::asset::io::AssetReaderError;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn failed(path: &str) -> LoadState {
        LoadState::Failed(Arc::new(AssetLoadError::AssetReaderError(
            AssetReaderError::NotFound(PathBuf::from(path)),
        )))
    }

    #[test]
    fn pending_handles_are_not_failures() {
        assert_eq!(load_failure([LoadState::Loading, LoadState::Loading], None), None);
        assert_eq!(load_failure([LoadState::Loaded, LoadState::Loading], Some(1)), None);
    }

    #[test]
    fn failed_file_handle_fails_while_scene_still_loading() {
        let reason = load_failure([failed("env.glb"), LoadState::Loading], None);
        assert!(reason.is_some_and(|reason| reason.contains("env.glb")));
    }

    #[test]
    fn decoded_file_without_scenes_fails() {
        let reason = load_failure([LoadState::Loaded, LoadState::Loading], Some(0));
        assert_eq!(reason.as_deref(), Some("file contains no scenes"));
    }
}
