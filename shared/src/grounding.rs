//! Grounded classification.
//!
//! A sphere overlap around the player pivot counts nearby colliders. The player's own
//! collider always overlaps the sphere, so the player is grounded when at least one *other*
//! collider is present (`count > 1`).
//!
//! Known limitation: this is a proximity heuristic, not a contact-normal test. A wall or a
//! ceiling within the sensor radius reports grounded just like a floor does.

use crate::{
    body::PhysicsBody,
    constants::{GROUND_LAYER_MASK, GROUND_SENSOR_RADIUS},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundSensor {
    /// Overlap sphere radius (meters).
    pub radius: f32,
    /// Collision layers that count as ground.
    pub layer_mask: u32,
}

impl Default for GroundSensor {
    fn default() -> Self {
        Self {
            radius: GROUND_SENSOR_RADIUS,
            layer_mask: GROUND_LAYER_MASK,
        }
    }
}

impl GroundSensor {
    /// Returns whether `body` is grounded this tick.
    #[inline]
    pub fn is_grounded<B: PhysicsBody + ?Sized>(&self, body: &B) -> bool {
        body.overlap_sphere_count(body.position(), self.radius, self.layer_mask) > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedBody;

    #[test]
    fn own_collider_alone_is_airborne() {
        let body = ScriptedBody::airborne();
        assert!(!GroundSensor::default().is_grounded(&body));
    }

    #[test]
    fn one_other_collider_is_grounded() {
        let body = ScriptedBody::grounded();
        assert!(GroundSensor::default().is_grounded(&body));
    }

    #[test]
    fn sensor_forwards_radius_and_mask() {
        let body = ScriptedBody::grounded();
        let sensor = GroundSensor {
            radius: 0.75,
            layer_mask: 0b100,
        };
        sensor.is_grounded(&body);
        assert_eq!(body.last_query(), Some((0.75, 0b100)));
    }
}
