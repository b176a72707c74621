//! Axis-aligned bounding volumes of mesh geometry.

use nalgebra::{Point3, Vector3};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub mins: Point3<f32>,
    pub maxs: Point3<f32>,
}

impl Aabb {
    #[inline]
    pub fn new(mins: Point3<f32>, maxs: Point3<f32>) -> Self {
        Self { mins, maxs }
    }

    /// The smallest box containing every point in `points`, or `None` if
    /// `points` is empty.
    pub fn from_points(points: &[Point3<f32>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut res = Self {
            mins: *first,
            maxs: *first,
        };
        for p in rest {
            res.mins = nalgebra::point![
                res.mins.x.min(p.x),
                res.mins.y.min(p.y),
                res.mins.z.min(p.z)
            ];
            res.maxs = nalgebra::point![
                res.maxs.x.max(p.x),
                res.maxs.y.max(p.y),
                res.maxs.z.max(p.z)
            ];
        }
        Some(res)
    }

    #[inline]
    pub fn contains(&self, p: &Point3<f32>) -> bool {
        let Self { mins: i, maxs: a } = self;
        (p.x >= i.x && p.y >= i.y && p.z >= i.z) && (p.x <= a.x && p.y <= a.y && p.z <= a.z)
    }

    /// Determine the center of `self`.
    #[inline]
    pub fn center(&self) -> Point3<f32> {
        let Self { mins: i, maxs: a } = self;
        nalgebra::point![(i.x + a.x) / 2.0, (i.y + a.y) / 2.0, (i.z + a.z) / 2.0]
    }

    /// The edge lengths of `self` along each axis.
    #[inline]
    pub fn extents(&self) -> Vector3<f32> {
        self.maxs - self.mins
    }
}
