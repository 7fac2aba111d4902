use bevy::prelude::*;
use constants::camera::{FRAMING_DEPTH_FACTOR, FRAMING_HEIGHT_FACTOR};

use crate::engine::assets::bounds::{EnvironmentBounds, SceneBounds};
use crate::engine::camera::orbit_controls::{OrbitControls, ViewerCamera};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Camera transform at `position` facing `look_at`. Falls back to the
    /// default orientation when the two coincide.
    pub fn to_transform(&self) -> Transform {
        let transform = Transform::from_translation(self.position);
        if self.position == self.look_at {
            transform
        } else {
            transform.looking_at(self.look_at, Vec3::Y)
        }
    }
}

/// Pose that keeps the whole box in view: raised by twice its height and
/// pulled back by three times its depth, aimed at the center.
pub fn frame_bounds(bounds: &SceneBounds) -> CameraPose {
    let center = bounds.center();
    let size = bounds.size();

    CameraPose {
        position: Vec3::new(
            center.x,
            center.y + size.y * FRAMING_HEIGHT_FACTOR,
            center.z + size.z * FRAMING_DEPTH_FACTOR,
        ),
        look_at: center,
    }
}

/// Generation the camera was last framed for. The user owns the camera
/// between framings.
#[derive(Resource, Default)]
pub struct CameraFraming {
    pub framed_generation: Option<u64>,
}

pub fn frame_camera_on_bounds(
    environment: Res<EnvironmentBounds>,
    mut framing: ResMut<CameraFraming>,
    mut cameras: Query<(&mut Transform, &mut OrbitControls), With<ViewerCamera>>,
) {
    if framing.framed_generation == Some(environment.generation) {
        return;
    }
    let Ok((mut transform, mut controls)) = cameras.single_mut() else {
        return;
    };

    let pose = frame_bounds(&environment.bounds);
    *transform = pose.to_transform();
    controls.target = pose.look_at;
    controls.update(&mut transform);
    framing.framed_generation = Some(environment.generation);

    info!(
        "Camera framed at {:?} looking at {:?} (generation {})",
        pose.position, pose.look_at, environment.generation
    );
}
