use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::paths::VIEWER_MANIFEST_EXTENSION;

// Crate engine modules
use crate::engine::assets::bounds::EnvironmentBounds;
use crate::engine::assets::viewer_manifest::{ViewerManifest, ViewerSettings};
use crate::engine::camera::framing::{CameraFraming, frame_camera_on_bounds};
use crate::engine::camera::orbit_controls::{
    apply_orbit_settings, orbit_camera_controller, spawn_viewer_camera,
};
use crate::engine::core::app_state::{AppState, transition_to_failed, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::environment_loader::{
    EnvironmentLoader, check_environment_load_state, recentre_environment,
    request_environment_reload, start_environment_load,
};
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::spawner::{
    SpawnState, SpawnedModelAsset, check_model_load_state, load_spawned_model,
    spawn_model_on_ground,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&[
            VIEWER_MANIFEST_EXTENSION,
        ]));

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<EnvironmentLoader>()
        .init_resource::<SpawnState>()
        .init_resource::<CameraFraming>();

    // Lighting, sky and camera render before any asset is ready
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            load_manifest_system.run_if(in_state(AppState::LoadingManifest)),
        )
        .add_systems(
            OnEnter(AppState::LoadingEnvironment),
            (load_spawned_model, start_environment_load),
        )
        .add_systems(
            Update,
            (check_environment_load_state, transition_to_failed)
                .chain()
                .run_if(in_state(AppState::LoadingEnvironment)),
        )
        .add_systems(
            Update,
            apply_orbit_settings.run_if(resource_added::<ViewerSettings>),
        )
        .add_systems(
            Update,
            check_model_load_state.run_if(resource_exists::<SpawnedModelAsset>),
        )
        .add_systems(
            Update,
            request_environment_reload.run_if(in_state(AppState::Running)),
        );

    add_composition_systems(&mut app);

    app.add_systems(
        Update,
        orbit_camera_controller.after(frame_camera_on_bounds),
    );

    app
}

/// Recentre, then spawn and frame from the published bounds.
///
/// Spawning and framing are gated on the bounds resource, so neither runs
/// before the first publication.
pub fn add_composition_systems(app: &mut App) {
    app.add_systems(
        Update,
        (recentre_environment, transition_to_running)
            .chain()
            .run_if(in_state(AppState::LoadingEnvironment)),
    )
    .add_systems(
        Update,
        (
            spawn_model_on_ground.run_if(resource_exists::<SpawnedModelAsset>),
            frame_camera_on_bounds,
        )
            .after(recentre_environment)
            .run_if(resource_exists::<EnvironmentBounds>),
    );
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands) {
    spawn_lighting(&mut commands);
    spawn_viewer_camera(&mut commands);
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: "wgpu=error,naga=warn,scene_viewer=info".to_string(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::framing::frame_bounds;
    use crate::engine::camera::orbit_controls::{OrbitControls, ViewerCamera};
    use crate::engine::loading::environment_loader::{EnvironmentRoot, SceneReady};
    use crate::engine::loading::gltf_scene::GltfSceneHandles;
    use crate::engine::scene::spawner::{SpawnRng, SpawnedModel};
    use bevy::render::primitives::Aabb;

    fn composition_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, bevy::state::app::StatesPlugin))
            .insert_state(AppState::LoadingEnvironment)
            .init_resource::<LoadingProgress>()
            .init_resource::<SpawnState>()
            .init_resource::<CameraFraming>()
            .insert_resource(SpawnRng::new(Some(1)))
            .insert_resource(SpawnedModelAsset::new(GltfSceneHandles::default(), "1.glb"));
        add_composition_systems(&mut app);

        app.world_mut().spawn((
            Transform::from_xyz(0.0, 10.0, 15.0),
            OrbitControls::default(),
            ViewerCamera,
        ));
        app
    }

    fn spawn_environment(app: &mut App, min: Vec3, max: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                EnvironmentRoot { generation: 1 },
                SceneReady,
                Transform::IDENTITY,
                GlobalTransform::IDENTITY,
            ))
            .with_children(|parent| {
                parent.spawn((
                    Aabb::from_min_max(min, max),
                    Transform::IDENTITY,
                    GlobalTransform::IDENTITY,
                ));
            })
            .id()
    }

    #[test]
    fn nothing_downstream_runs_before_publication() {
        let mut app = composition_app();

        app.update();

        assert!(app.world().get_resource::<EnvironmentBounds>().is_none());
        assert_eq!(app.world().resource::<SpawnState>().drawn_generation, None);
        assert_eq!(app.world().resource::<CameraFraming>().framed_generation, None);
    }

    #[test]
    fn environment_spawn_and_camera_compose() {
        let mut app = composition_app();
        let root = spawn_environment(
            &mut app,
            Vec3::new(-5.0, 0.0, -5.0),
            Vec3::new(5.0, 10.0, 5.0),
        );

        app.update();
        app.update();

        assert_eq!(
            app.world().get::<Transform>(root).unwrap().translation,
            Vec3::new(0.0, -5.0, 0.0)
        );

        let published = *app.world().resource::<EnvironmentBounds>();
        assert!(published.bounds.center().abs_diff_eq(Vec3::ZERO, 1e-4));

        let spawned = app
            .world_mut()
            .query_filtered::<&Transform, With<SpawnedModel>>()
            .iter(app.world())
            .map(|transform| transform.translation)
            .collect::<Vec<_>>();
        assert_eq!(spawned.len(), 1);
        let spawn = spawned[0];
        assert_eq!(spawn.y, -5.0);
        assert!((-5.0..=5.0).contains(&spawn.x));
        assert!((-5.0..=5.0).contains(&spawn.z));

        let pose = frame_bounds(&published.bounds);
        assert!(pose.position.abs_diff_eq(Vec3::new(0.0, 10.0, 15.0), 1e-4));
        assert!(pose.look_at.abs_diff_eq(Vec3::ZERO, 1e-4));

        let controls = app
            .world_mut()
            .query::<&OrbitControls>()
            .iter(app.world())
            .next()
            .cloned()
            .unwrap();
        assert_eq!(controls.target, published.bounds.center());

        assert_eq!(
            *app.world().resource::<State<AppState>>().get(),
            AppState::Running
        );
    }
}
