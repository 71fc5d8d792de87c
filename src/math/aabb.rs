use glam::Vec3;

/// Axis-aligned bounding box
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => AABB::new(p, p),
                Some(b) => AABB::new(b.min.min(p), b.max.max(p)),
            })
        })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_points() {
        let b = AABB::from_points([Vec3::X, -Vec3::Y, Vec3::Z * 3.0]).unwrap();
        assert_eq!(b.min, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 0.0, 3.0));
        assert!(AABB::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_extent() {
        let b = AABB::new(Vec3::splat(-1.0), Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(b.extent(), Vec3::new(2.0, 4.0, 1.5));
    }
}
