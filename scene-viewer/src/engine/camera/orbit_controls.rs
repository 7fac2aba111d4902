use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera::{
    CAMERA_FOV_DEGREES, INITIAL_CAMERA_POSITION, ORBIT_DISTANCE, ORBIT_PAN_SPEED,
    ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED,
};

use crate::engine::assets::viewer_manifest::ViewerSettings;

/// Marker for the single viewer camera.
#[derive(Component)]
pub struct ViewerCamera;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitAction {
    Rotate,
    Dolly,
    Pan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonMap {
    pub left: OrbitAction,
    pub middle: OrbitAction,
    pub right: OrbitAction,
}

impl Default for MouseButtonMap {
    fn default() -> Self {
        Self {
            left: OrbitAction::Rotate,
            middle: OrbitAction::Dolly,
            right: OrbitAction::Pan,
        }
    }
}

impl MouseButtonMap {
    pub fn action_for(&self, button: MouseButton) -> Option<OrbitAction> {
        match button {
            MouseButton::Left => Some(self.left),
            MouseButton::Middle => Some(self.middle),
            MouseButton::Right => Some(self.right),
            _ => None,
        }
    }
}

/// Orbit rig around `target`.
///
/// Input only queues deltas; [`OrbitControls::update`] applies them to the
/// camera transform. Anything that moves `target` or the camera directly must
/// call `update` afterwards for the change to take effect.
#[derive(Component, Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub mouse_buttons: MouseButtonMap,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    // Pending input, cleared by update
    yaw_delta: f32,
    polar_delta: f32,
    pan_offset: Vec3,
    dolly_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            min_distance: ORBIT_DISTANCE,
            max_distance: ORBIT_DISTANCE,
            enable_rotate: true,
            enable_zoom: false,
            enable_pan: true,
            mouse_buttons: MouseButtonMap::default(),
            rotate_speed: ORBIT_ROTATE_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            yaw_delta: 0.0,
            polar_delta: 0.0,
            pan_offset: Vec3::ZERO,
            dolly_scale: 1.0,
        }
    }
}

impl OrbitControls {
    /// Pin the orbit radius to a single distance.
    pub fn fix_distance(&mut self, distance: f32) {
        self.min_distance = distance;
        self.max_distance = distance;
    }

    /// Queue a drag rotation. A drag across the full viewport height is one turn.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        if !self.enable_rotate || viewport_height <= 0.0 {
            return;
        }
        self.yaw_delta -= TAU * delta.x / viewport_height * self.rotate_speed;
        self.polar_delta -= TAU * delta.y / viewport_height * self.rotate_speed;
    }

    /// Queue a screen-space pan scaled so the target tracks the cursor.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, fov_y: f32, camera: &Transform) {
        if !self.enable_pan || viewport_height <= 0.0 {
            return;
        }
        let distance = (camera.translation - self.target).length() * (fov_y / 2.0).tan();
        let scale = 2.0 * distance / viewport_height * self.pan_speed;

        self.pan_offset += *camera.left() * delta.x * scale;
        self.pan_offset += *camera.up() * delta.y * scale;
    }

    /// Queue a dolly. Ignored while zoom is disabled.
    pub fn dolly(&mut self, scale: f32) {
        if !self.enable_zoom || !scale.is_finite() || scale <= 0.0 {
            return;
        }
        self.dolly_scale *= scale;
    }

    /// Apply queued input and distance limits, then aim the camera at `target`.
    pub fn update(&mut self, camera: &mut Transform) {
        let offset = camera.translation - self.target;
        let radius = offset.length();

        // Spherical angles about +Y; a camera sitting on the target reads as
        // straight overhead.
        let (mut yaw, mut polar) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, 0.0)
        };

        yaw += self.yaw_delta;
        polar += self.polar_delta;
        polar = polar
            .clamp(self.min_polar_angle, self.max_polar_angle)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);

        let radius = (radius * self.dolly_scale).clamp(self.min_distance, self.max_distance);

        self.target += self.pan_offset;

        let offset = Vec3::new(
            radius * polar.sin() * yaw.sin(),
            radius * polar.cos(),
            radius * polar.sin() * yaw.cos(),
        );
        *camera =
            Transform::from_translation(self.target + offset).looking_at(self.target, Vec3::Y);

        self.yaw_delta = 0.0;
        self.polar_delta = 0.0;
        self.pan_offset = Vec3::ZERO;
        self.dolly_scale = 1.0;
    }
}

pub fn spawn_viewer_camera(commands: &mut Commands) {
    commands.spawn((
        Name::new("ViewerCamera"),
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(INITIAL_CAMERA_POSITION)
            .looking_at(Vec3::ZERO, Vec3::Y),
        OrbitControls::default(),
        ViewerCamera,
    ));
}

pub fn apply_orbit_settings(
    settings: Res<ViewerSettings>,
    mut controls: Query<&mut OrbitControls, With<ViewerCamera>>,
) {
    for mut controls in &mut controls {
        controls.fix_distance(settings.orbit_distance);
        controls.pan_speed = settings.pan_speed;
        controls.rotate_speed = settings.rotate_speed;
    }
}

pub fn orbit_camera_controller(
    mut camera_query: Query<(&mut Transform, &Projection, &mut OrbitControls), With<ViewerCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok((mut camera_transform, projection, mut controls)) = camera_query.single_mut() else {
        return;
    };

    let viewport_height = windows
        .single()
        .map(|window| window.height())
        .unwrap_or(0.0);
    let fov_y = match projection {
        Projection::Perspective(perspective) => perspective.fov,
        _ => CAMERA_FOV_DEGREES.to_radians(),
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();

    if mouse_delta != Vec2::ZERO {
        for button in [MouseButton::Left, MouseButton::Middle, MouseButton::Right] {
            if !mouse_button.pressed(button) {
                continue;
            }
            match controls.mouse_buttons.action_for(button) {
                Some(OrbitAction::Rotate) => controls.rotate(mouse_delta, viewport_height),
                Some(OrbitAction::Pan) => {
                    controls.pan(mouse_delta, viewport_height, fov_y, &camera_transform)
                }
                Some(OrbitAction::Dolly) => controls.dolly(0.95_f32.powf(-mouse_delta.y * 0.1)),
                None => {}
            }
        }
    }

    let scroll: f32 = scroll_events.read().map(|scroll| scroll.y).sum();
    if scroll != 0.0 {
        controls.dolly(0.95_f32.powf(scroll));
    }

    controls.update(&mut camera_transform);
}
