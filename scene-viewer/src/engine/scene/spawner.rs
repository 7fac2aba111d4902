use bevy::gltf::Gltf;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::assets::bounds::{EnvironmentBounds, SceneBounds};
use crate::engine::assets::viewer_manifest::ViewerSettings;
use crate::engine::error::SceneError;
use crate::engine::loading::gltf_scene::GltfSceneHandles;

/// Parent node the spawned model hangs under.
#[derive(Component)]
pub struct SpawnPlacement;

#[derive(Component)]
pub struct SpawnedModel;

/// Random source for spawn draws.
#[derive(Resource)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    /// Seeded when a seed is given, otherwise seeded from the platform clock.
    pub fn new(seed: Option<u64>) -> Self {
        Self(StdRng::seed_from_u64(seed.unwrap_or_else(clock_seed)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Handle to the secondary model, loaded alongside the environment.
#[derive(Resource)]
pub struct SpawnedModelAsset {
    pub handles: GltfSceneHandles,
    pub path: String,
    failure_reported: bool,
}

impl SpawnedModelAsset {
    pub fn new(handles: GltfSceneHandles, path: impl Into<String>) -> Self {
        Self {
            handles,
            path: path.into(),
            failure_reported: false,
        }
    }

    /// Turn a load failure into an error the first time one is seen.
    pub fn record_failure(&mut self, reason: Option<String>) -> Option<SceneError> {
        if self.failure_reported {
            return None;
        }
        let reason = reason?;
        self.failure_reported = true;
        Some(SceneError::ModelLoad {
            path: self.path.clone(),
            reason,
        })
    }
}

/// Generation the current spawn position was drawn for.
#[derive(Resource, Default)]
pub struct SpawnState {
    pub drawn_generation: Option<u64>,
}

/// Random point on the lower face of the box, inside its x/z footprint.
///
/// A zero extent on an axis collapses that coordinate to the center.
pub fn spawn_position<R: Rng + ?Sized>(bounds: &SceneBounds, rng: &mut R) -> Vec3 {
    let center = bounds.center();
    let size = bounds.size();

    let x = center.x + (rng.gen_range(0.0f32..1.0) - 0.5) * size.x;
    let z = center.z + (rng.gen_range(0.0f32..1.0) - 0.5) * size.z;
    let y = bounds.ground_height();

    Vec3::new(x, y, z)
}

pub fn load_spawned_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    existing: Option<Res<SpawnedModelAsset>>,
) {
    // Reloads keep the model that is already in the scene
    if existing.is_some() {
        return;
    }

    let handles = GltfSceneHandles::load(&asset_server, &settings.spawned_model_path);
    commands.insert_resource(SpawnedModelAsset::new(
        handles,
        settings.spawned_model_path.clone(),
    ));
}

// A failed model is reported once; environment and camera carry on
pub fn check_model_load_state(
    mut model: ResMut<SpawnedModelAsset>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
) {
    if model.failure_reported {
        return;
    }

    let reason = model.handles.failure(&asset_server, &gltfs);
    if let Some(err) = model.record_failure(reason) {
        error!("{err}");
    }
}

/// Place the secondary model once per published environment bounds.
pub fn spawn_model_on_ground(
    mut commands: Commands,
    environment: Res<EnvironmentBounds>,
    model: Res<SpawnedModelAsset>,
    mut rng: ResMut<SpawnRng>,
    mut state: ResMut<SpawnState>,
    mut spawned: Query<&mut Transform, With<SpawnedModel>>,
) {
    if state.drawn_generation == Some(environment.generation) {
        return;
    }

    let position = spawn_position(&environment.bounds, &mut rng.0);
    state.drawn_generation = Some(environment.generation);

    info!(
        "Spawning {} at {:?} (generation {})",
        model.path, position, environment.generation
    );

    if let Ok(mut transform) = spawned.single_mut() {
        transform.translation = position;
        return;
    }

    commands
        .spawn((
            Name::new("SpawnPlacement"),
            SpawnPlacement,
            Transform::IDENTITY,
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("SpawnedModel"),
                SpawnedModel,
                SceneRoot(model.handles.scene.clone()),
                Transform::from_translation(position),
            ));
        });
}
