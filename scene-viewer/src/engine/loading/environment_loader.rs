use bevy::gltf::Gltf;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;
use bevy::scene::SceneInstanceReady;

use crate::engine::assets::bounds::{EnvironmentBounds, SceneBounds, measure_world_bounds};
use crate::engine::assets::viewer_manifest::ViewerSettings;
use crate::engine::core::app_state::AppState;
use crate::engine::error::SceneError;
use crate::engine::loading::gltf_scene::GltfSceneHandles;
use crate::engine::loading::progress::LoadingProgress;

/// Root of the environment scene instance.
#[derive(Component)]
pub struct EnvironmentRoot {
    pub generation: u64,
}

/// Scene instance has been spawned into the world.
#[derive(Component)]
pub struct SceneReady;

/// Root has been recentred and its bounds published.
#[derive(Component)]
pub struct Recentred;

#[derive(Resource, Default)]
pub struct EnvironmentLoader {
    handles: Option<GltfSceneHandles>,
    generation: u64,
}

impl EnvironmentLoader {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of moving a box's center onto the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recentring {
    pub original: SceneBounds,
    pub translation: Vec3,
}

impl Recentring {
    /// The translation covers all three axes, so the vertical center rather
    /// than the base of the box ends up at y = 0.
    pub fn of(original: SceneBounds) -> Self {
        Self {
            original,
            translation: -original.center(),
        }
    }
}

// Begin a new load generation
pub fn start_environment_load(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    mut loader: ResMut<EnvironmentLoader>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    loader.generation += 1;
    loading_progress.environment_published = false;
    loading_progress.environment_failed = false;

    let handles = GltfSceneHandles::load(&asset_server, &settings.environment_path);
    let scene = handles.scene.clone();
    loader.handles = Some(handles);

    info!(
        "Loading environment {} (generation {})",
        settings.environment_path, loader.generation
    );

    commands
        .spawn((
            Name::new("Environment"),
            EnvironmentRoot {
                generation: loader.generation,
            },
            SceneRoot(scene),
            Transform::IDENTITY,
        ))
        .observe(mark_scene_ready);
}

pub fn mark_scene_ready(trigger: Trigger<SceneInstanceReady>, mut commands: Commands) {
    commands.entity(trigger.target()).insert(SceneReady);
}

// Load failures are fatal for the environment subtree, no retry
pub fn check_environment_load_state(
    loader: Res<EnvironmentLoader>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    settings: Res<ViewerSettings>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    if loading_progress.environment_failed {
        return;
    }
    let Some(ref handles) = loader.handles else {
        return;
    };

    if let Some(reason) = handles.failure(&asset_server, &gltfs) {
        let err = SceneError::EnvironmentLoad {
            path: settings.environment_path.clone(),
            reason,
        };
        error!("{err}");
        loading_progress.environment_failed = true;
    }
}

/// Recentre each ready environment root and publish its bounds once.
pub fn recentre_environment(
    mut commands: Commands,
    mut roots: Query<
        (Entity, &EnvironmentRoot, &mut Transform),
        (With<SceneReady>, Without<Recentred>),
    >,
    children: Query<&Children>,
    geometry: Query<(&Aabb, &GlobalTransform)>,
    pending_meshes: Query<(), (With<Mesh3d>, Without<Aabb>)>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    for (entity, root, mut transform) in &mut roots {
        let parts: Vec<Entity> = std::iter::once(entity)
            .chain(children.iter_descendants(entity))
            .collect();

        // Mesh bounds are filled in after the instance spawns
        if parts.iter().any(|&part| pending_meshes.contains(part)) {
            continue;
        }

        let measured = measure_world_bounds(
            parts.iter().filter_map(|&part| geometry.get(part).ok()),
            Vec3::ZERO,
        );
        let (recentring, recentred) = if measured.is_finite() {
            let recentring = Recentring::of(measured);
            let recentred = measure_world_bounds(
                parts.iter().filter_map(|&part| geometry.get(part).ok()),
                recentring.translation,
            );
            (recentring, recentred)
        } else {
            warn!("Environment bounds {measured:?} are not finite; leaving it in place");
            (Recentring::of(SceneBounds::ZERO), SceneBounds::ZERO)
        };
        transform.translation += recentring.translation;

        info!(
            "✓ Environment recentred: center {:?} moved by {:?}, size {:?}",
            recentring.original.center(),
            recentring.translation,
            recentred.size()
        );

        commands.entity(entity).insert(Recentred);
        commands.insert_resource(EnvironmentBounds {
            bounds: recentred,
            generation: root.generation,
        });
        loading_progress.environment_published = true;
    }
}

/// Drop the current environment and start a new load generation.
/// The spawned model stays in place until the new bounds move it.
pub fn request_environment_reload(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    roots: Query<Entity, With<EnvironmentRoot>>,
    loader: Res<EnvironmentLoader>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    info!("Reloading environment (generation {} retired)", loader.generation());
    for root in &roots {
        commands.entity(root).despawn();
    }
    next_state.set(AppState::LoadingEnvironment);
}
