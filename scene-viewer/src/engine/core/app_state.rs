use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    LoadingManifest,
    /// Entered once per environment load, including reloads.
    LoadingEnvironment,
    Running,
    /// Environment could not be loaded. Lighting, sky and camera stay up.
    Failed,
}

// Transition to Running once the environment bounds are out
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.environment_published {
        info!("→ Environment published, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

pub fn transition_to_failed(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.environment_failed {
        error!("→ Environment unavailable, transitioning to Failed state");
        next_state.set(AppState::Failed);
    }
}
