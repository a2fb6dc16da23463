//! Conversions between the simulation's nalgebra types and Bevy's glam types.

use bevy::prelude::*;
use underdog_shared::Pose;

#[inline]
pub fn to_vec3(v: &underdog_shared::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn to_quat(q: &underdog_shared::Quat) -> Quat {
    let q = q.quaternion();
    Quat::from_xyzw(q.i, q.j, q.k, q.w)
}

#[inline]
pub fn from_vec3(v: Vec3) -> underdog_shared::Vec3 {
    underdog_shared::Vec3::new(v.x, v.y, v.z)
}

/// Render transform for a simulation pose.
#[inline]
pub fn to_transform(pose: &Pose) -> Transform {
    Transform::from_translation(to_vec3(&pose.translation)).with_rotation(to_quat(&pose.rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaw_survives_the_conversion() {
        let pose = Pose::from_yaw(underdog_shared::Vec3::new(1.0, 2.0, 3.0), 0.9);
        let transform = to_transform(&pose);

        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        let expected = Quat::from_rotation_y(0.9);
        assert!(transform.rotation.angle_between(expected) < 1.0e-5);
    }
}
