use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// Axis-aligned box in world coordinates.
/// Always satisfies `min <= max` componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SceneBounds {
    /// Zero-size box at the origin. Stands in for assets without geometry.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Build from two corners in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing every point, or `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, point| {
            Some(match bounds {
                Some(bounds) => bounds.including(point),
                None => Self::from_corners(point, point),
            })
        })
    }

    pub fn including(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Midpoint of the box, used as the recentring pivot and camera target.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Height of the lower face, derived from center and size.
    pub fn ground_height(&self) -> f32 {
        self.center().y - self.size().y / 2.0
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// World-space box over every mesh part, with `offset` added to each corner.
///
/// Each part contributes the eight corners of its local `Aabb` mapped through
/// its `GlobalTransform`. Passing the translation just applied to a parentless
/// root gives the box the parts will have once transforms propagate.
/// No parts yields [`SceneBounds::ZERO`].
pub fn measure_world_bounds<'a>(
    parts: impl IntoIterator<Item = (&'a Aabb, &'a GlobalTransform)>,
    offset: Vec3,
) -> SceneBounds {
    let corners = parts.into_iter().flat_map(|(aabb, global)| {
        let min = Vec3::from(aabb.min());
        let max = Vec3::from(aabb.max());
        let global = *global;
        (0..8).map(move |i| {
            let corner = Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            global.transform_point(corner) + offset
        })
    });

    SceneBounds::from_points(corners).unwrap_or(SceneBounds::ZERO)
}

/// Environment box published once per load.
///
/// Written only by the environment loader and replaced wholesale on every new
/// load. The spawner and the camera framer key their one-shot work on
/// `generation`.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentBounds {
    pub bounds: SceneBounds,
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_and_size_follow_corners() {
        let bounds = SceneBounds::from_corners(
            Vec3::new(5.0, 10.0, 5.0),
            Vec3::new(-5.0, 0.0, -5.0),
        );
        assert_eq!(bounds.min, Vec3::new(-5.0, 0.0, -5.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(bounds.size(), Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(bounds.ground_height(), 0.0);
    }

    #[test]
    fn empty_point_set_has_no_bounds() {
        assert_eq!(SceneBounds::from_points(std::iter::empty()), None);
    }

    #[test]
    fn measure_without_parts_is_zero_box() {
        let bounds = measure_world_bounds(std::iter::empty(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(bounds, SceneBounds::ZERO);
        assert_eq!(bounds.center(), Vec3::ZERO);
        assert_eq!(bounds.size(), Vec3::ZERO);
    }

    #[test]
    fn measure_applies_global_transform_to_every_corner() {
        let aabb = Aabb::from_min_max(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 1.0, 2.0));
        let global = GlobalTransform::from(
            Transform::from_xyz(10.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2))
                .with_scale(Vec3::splat(2.0)),
        );

        let bounds = measure_world_bounds([(&aabb, &global)], Vec3::ZERO);

        // Quarter turn about Y swaps the X and Z extents.
        assert!(bounds.min.abs_diff_eq(Vec3::new(6.0, 0.0, -2.0), 1e-4));
        assert!(bounds.max.abs_diff_eq(Vec3::new(14.0, 2.0, 2.0), 1e-4));
    }

    #[test]
    fn measure_unions_parts_and_shifts_by_offset() {
        let a = Aabb::from_min_max(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(0.0, 4.0, 0.0));
        let b = Aabb::from_min_max(Vec3::new(0.0, 0.0, 0.0), Vec3::new(5.0, 10.0, 5.0));
        let identity = GlobalTransform::IDENTITY;

        let bounds = measure_world_bounds(
            [(&a, &identity), (&b, &identity)],
            Vec3::new(0.0, -5.0, 0.0),
        );

        assert!(bounds.min.abs_diff_eq(Vec3::new(-5.0, -5.0, -5.0), 1e-5));
        assert!(bounds.max.abs_diff_eq(Vec3::new(5.0, 5.0, 5.0), 1e-5));
        assert!(bounds.center().abs_diff_eq(Vec3::ZERO, 1e-4));
    }
}
