use underdog_shared::Quat;

/// A unit quaternion (w + xi + yj + zk), stored as four `f32` scalars in `(x, y, z, w)` order.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbQuat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl From<DbQuat> for Quat {
    fn from(q: DbQuat) -> Self {
        Quat::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
    }
}

impl From<Quat> for DbQuat {
    fn from(uq: Quat) -> Self {
        let q = uq.into_inner();
        DbQuat {
            x: q.i,
            y: q.j,
            z: q.k,
            w: q.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use underdog_shared::Vec3;

    #[test]
    fn yaw_is_stored_on_the_y_component() {
        let yaw = 0.7;
        let stored = DbQuat::from(Quat::from_axis_angle(&Vec3::y_axis(), yaw));
        assert!(stored.x.abs() < 1.0e-6 && stored.z.abs() < 1.0e-6);
        assert!((stored.y - (yaw * 0.5).sin()).abs() < 1.0e-6);

        let back: Quat = stored.into();
        assert!((back.angle() - yaw).abs() < 1.0e-5);
    }
}
