use bevy::prelude::*;
use constants::lighting::{
    AMBIENT_BRIGHTNESS_PER_UNIT, AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY,
    DIRECTIONAL_LIGHT_POSITION, DIRECTIONAL_LUX_PER_UNIT, SKY_HAZE_BLEND, SKY_HAZE_RGB,
    SKY_NIGHT_RGB, SKY_SUN_POSITION, SKY_TURBIDITY, SKY_TURBIDITY_MAX, SKY_TURBIDITY_MIN,
    SKY_ZENITH_RGB,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkySettings {
    pub sun_position: Vec3,
    pub turbidity: f32,
}

impl Default for SkySettings {
    fn default() -> Self {
        Self {
            sun_position: SKY_SUN_POSITION,
            turbidity: SKY_TURBIDITY,
        }
    }
}

/// Backdrop colour for a sun direction and haze level.
///
/// Haze washes the zenith blue towards white; a low sun darkens the result.
pub fn sky_colour(sky: &SkySettings) -> Color {
    let elevation = sky.sun_position.normalize_or_zero().y.clamp(0.0, 1.0);
    let haze = ((sky.turbidity - SKY_TURBIDITY_MIN) / (SKY_TURBIDITY_MAX - SKY_TURBIDITY_MIN))
        .clamp(0.0, 1.0);

    let day = SKY_ZENITH_RGB.lerp(SKY_HAZE_RGB, haze * SKY_HAZE_BLEND);
    let rgb = SKY_NIGHT_RGB.lerp(day, elevation.sqrt());
    Color::srgb(rgb.x, rgb.y, rgb.z)
}

// Static rig, up before any asset is ready
pub fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_INTENSITY * AMBIENT_BRIGHTNESS_PER_UNIT,
        ..default()
    });

    commands.spawn((
        Name::new("DirectionalLight"),
        DirectionalLight {
            illuminance: DIRECTIONAL_INTENSITY * DIRECTIONAL_LUX_PER_UNIT,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(ClearColor(sky_colour(&SkySettings::default())));
}
