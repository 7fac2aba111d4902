use bevy::math::Vec3;

/// Ambient light intensity on a 0..1 scale.
pub const AMBIENT_INTENSITY: f32 = 0.5;

/// Bevy ambient brightness corresponding to an intensity of 1.0.
pub const AMBIENT_BRIGHTNESS_PER_UNIT: f32 = 400.0;

pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const DIRECTIONAL_INTENSITY: f32 = 1.5;

/// Illuminance in lux corresponding to a directional intensity of 1.0.
pub const DIRECTIONAL_LUX_PER_UNIT: f32 = 10_000.0;

/// Sun direction for the sky backdrop. Not normalised.
pub const SKY_SUN_POSITION: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Atmospheric haze. 2 is a very clear sky, 20 is heavy haze.
pub const SKY_TURBIDITY: f32 = 10.0;
pub const SKY_TURBIDITY_MIN: f32 = 2.0;
pub const SKY_TURBIDITY_MAX: f32 = 20.0;

/// Sky colour straight up on a clear day, sRGB components.
pub const SKY_ZENITH_RGB: Vec3 = Vec3::new(0.22, 0.47, 0.86);

/// Near-white the zenith fades towards as turbidity rises.
pub const SKY_HAZE_RGB: Vec3 = Vec3::new(0.86, 0.89, 0.93);

/// Backdrop once the sun is at or below the horizon.
pub const SKY_NIGHT_RGB: Vec3 = Vec3::new(0.02, 0.03, 0.06);

/// Share of the haze colour mixed in at maximum turbidity.
pub const SKY_HAZE_BLEND: f32 = 0.6;
