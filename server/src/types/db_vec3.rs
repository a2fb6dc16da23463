use underdog_shared::Vec3;

/// A 3D vector in world space (meters).
///
/// Used for translations, anchor offsets and hit directions.
#[derive(spacetimedb::SpacetimeType, Debug, Clone, Copy, PartialEq)]
pub struct DbVec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for DbVec3 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DbVec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Unit vector along `self`, or `None` when it has no usable direction.
    pub fn direction(self) -> Option<Self> {
        if !self.is_finite() {
            return None;
        }
        Vec3::from(self).try_normalize(1.0e-6).map(Self::from)
    }
}

impl From<DbVec3> for Vec3 {
    fn from(v: DbVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for DbVec3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_normalizes_and_rejects_degenerate_input() {
        let dir = DbVec3::new(0.0, 0.0, 4.0).direction();
        assert_eq!(dir, Some(DbVec3::new(0.0, 0.0, 1.0)));

        assert_eq!(DbVec3::ZERO.direction(), None);
        assert_eq!(DbVec3::new(f32::NAN, 0.0, 1.0).direction(), None);
        assert_eq!(DbVec3::new(f32::INFINITY, 0.0, 0.0).direction(), None);
    }
}
