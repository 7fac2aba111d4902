use bevy::math::Vec3;

/// Camera position used until the environment has been framed.
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 10.0, 15.0);

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Camera height above the box center, in multiples of the box height.
pub const FRAMING_HEIGHT_FACTOR: f32 = 2.0;

/// Camera offset along +Z from the box center, in multiples of the box depth.
pub const FRAMING_DEPTH_FACTOR: f32 = 3.0;

/// Orbit radius. Minimum and maximum orbit distance are both pinned to it.
pub const ORBIT_DISTANCE: f32 = 20.0;

pub const ORBIT_PAN_SPEED: f32 = 7.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

/// Keeps the orbit away from the poles so the view basis stays well defined.
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;
