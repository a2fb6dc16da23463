//! Conversions between generated row types and the simulation's nalgebra types.

use crate::module_bindings::{DbQuat, DbVec3, Vehicle as VehicleRow};
use underdog_shared::{Pose, Quat, Vec3, Vehicle, vehicle::TriggerVolume};

impl From<DbVec3> for Vec3 {
    fn from(v: DbVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for DbVec3 {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<DbQuat> for Quat {
    fn from(q: DbQuat) -> Self {
        Quat::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
    }
}

fn pose(translation: &DbVec3, rotation: &DbQuat) -> Pose {
    Pose::new(Vec3::from(translation.clone()), Quat::from(rotation.clone()))
}

impl VehicleRow {
    pub fn root_pose(&self) -> Pose {
        pose(&self.translation, &self.rotation)
    }

    /// Simulation vehicle with a free seat; occupancy is reconciled separately.
    pub fn to_vehicle(&self) -> Vehicle {
        let mut vehicle = Vehicle::new(
            self.id,
            self.root_pose(),
            pose(&self.enter_anchor_translation, &self.enter_anchor_rotation),
            pose(&self.seat_anchor_translation, &self.seat_anchor_rotation),
        );
        vehicle.trigger = TriggerVolume {
            radius: self.trigger_radius,
            ..TriggerVolume::default()
        };
        vehicle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> DbVec3 {
        DbVec3 { x, y, z }
    }

    #[test]
    fn vehicle_row_keeps_its_anchors_vehicle_local() {
        let (s, c) = (0.25_f32).sin_cos();
        let row = VehicleRow {
            id: 3,
            translation: v(10.0, 0.0, 0.0),
            rotation: DbQuat {
                x: 0.0,
                y: s,
                z: 0.0,
                w: c,
            },
            enter_anchor_translation: v(-1.6, 0.0, 0.4),
            enter_anchor_rotation: DbQuat {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            },
            seat_anchor_translation: v(-0.4, 0.5, 0.4),
            seat_anchor_rotation: DbQuat {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            },
            trigger_radius: 3.5,
            occupant: None,
        };

        let vehicle = row.to_vehicle();
        assert_eq!(vehicle.id, 3);
        assert_eq!(vehicle.enter_anchor.translation, Vec3::new(-1.6, 0.0, 0.4));
        assert_eq!(vehicle.trigger.radius, 3.5);
        assert!((vehicle.pose.rotation.angle() - 0.5).abs() < 1.0e-5);

        let world = vehicle.enter_anchor_pose();
        assert!((world.translation - Vec3::new(10.0, 0.0, 0.0)).norm() > 1.0);
    }
}
