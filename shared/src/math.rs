/*!
Math aliases and the small pose helpers shared by every controller module.

Conventions
- Y is up. The reference forward axis is +Z.
- Rotations are unit quaternions. Facing is yaw-only (about +Y).
*/

use nalgebra as na;

pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// A world-space position + rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::zeros(), Quat::identity())
    }
}

impl Pose {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pose at `translation` facing `yaw` radians about +Y.
    #[inline]
    pub fn from_yaw(translation: Vec3, yaw: f32) -> Self {
        Self::new(translation, Quat::from_axis_angle(&Vec3::y_axis(), yaw))
    }

    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(na::Translation3::from(self.translation), self.rotation)
    }

    /// Component-wise interpolation toward `other`.
    ///
    /// Translation is linear, rotation is a normalized lerp along the shortest arc.
    /// `t` is used as given; callers clamp it.
    #[inline]
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        Pose {
            translation: self.translation.lerp(&other.translation, t),
            rotation: nlerp_shortest(&self.rotation, &other.rotation, t),
        }
    }
}

/// Normalized quaternion lerp that always takes the shortest arc.
///
/// Never panics: after the hemisphere flip the two endpoints are at most 90 degrees apart in
/// 4D, so the interpolated quaternion cannot reach zero length.
#[inline]
pub fn nlerp_shortest(a: &Quat, b: &Quat, t: f32) -> Quat {
    let qa = a.quaternion();
    let mut qb = *b.quaternion();
    if qa.dot(&qb) < 0.0 {
        qb = -qb;
    }
    Quat::new_normalize(qa.lerp(&qb, t))
}

/// Scale `v` down to unit length if it is longer than 1. Shorter vectors pass through.
#[inline]
pub fn clamp_unit(v: Vec2) -> Vec2 {
    let len_sq = v.norm_squared();
    if len_sq > 1.0 {
        v / len_sq.sqrt()
    } else {
        v
    }
}

/// Signed angle (radians) about +Y from the +Z forward axis to the planar vector `xz`.
///
/// Positive angles turn +Z toward +X, which matches a right-handed rotation about +Y.
#[inline]
pub fn yaw_from_xz(xz: Vec2) -> f32 {
    xz.x.atan2(xz.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn clamp_unit_shortens_only_long_vectors() {
        let long = clamp_unit(Vec2::new(3.0, 4.0));
        assert!((long.norm() - 1.0).abs() < 1.0e-6);
        assert!((long.x - 0.6).abs() < 1.0e-6);

        let short = clamp_unit(Vec2::new(0.3, 0.4));
        assert_eq!(short, Vec2::new(0.3, 0.4));
    }

    #[test]
    fn yaw_from_xz_matches_rotation_of_forward_axis() {
        let yaw = yaw_from_xz(Vec2::new(1.0, 0.0));
        assert!((yaw - FRAC_PI_2).abs() < 1.0e-6);

        // Rotating +Z by that yaw lands on +X.
        let rotated = Quat::from_axis_angle(&Vec3::y_axis(), yaw) * Vec3::z();
        assert!((rotated - Vec3::x()).norm() < 1.0e-5);
    }

    #[test]
    fn pose_lerp_hits_both_endpoints() {
        let a = Pose::from_yaw(Vec3::new(0.0, 0.0, 0.0), 0.0);
        let b = Pose::from_yaw(Vec3::new(2.0, 1.0, -4.0), FRAC_PI_2);

        let start = a.lerp(&b, 0.0);
        let end = a.lerp(&b, 1.0);
        assert!((start.translation - a.translation).norm() < 1.0e-6);
        assert!((end.translation - b.translation).norm() < 1.0e-6);
        assert!(end.rotation.angle_to(&b.rotation) < 1.0e-3);

        let mid = a.lerp(&b, 0.5);
        assert!((mid.translation - Vec3::new(1.0, 0.5, -2.0)).norm() < 1.0e-6);
    }

    #[test]
    fn nlerp_takes_the_short_way_round() {
        let a = Quat::from_axis_angle(&Vec3::y_axis(), 0.1);
        // Same orientation as `a`, opposite hemisphere.
        let b = Quat::new_unchecked(-*a.quaternion());
        let mid = nlerp_shortest(&a, &b, 0.5);
        assert!(mid.angle_to(&a) < 1.0e-3);
    }
}
