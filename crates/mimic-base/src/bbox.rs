use crate::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box described by its extreme coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<T> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T> BoundingBox<T> {
    pub fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy> BoundingBox<T> {
    pub fn min(&self) -> Vec2<T> {
        Vec2::new(self.min_x, self.min_y)
    }

    pub fn max(&self) -> Vec2<T> {
        Vec2::new(self.max_x, self.max_y)
    }

    /// Corner points in drawing order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Vec2<T>; 4] {
        [
            Vec2::new(self.min_x, self.min_y),
            Vec2::new(self.max_x, self.min_y),
            Vec2::new(self.max_x, self.max_y),
            Vec2::new(self.min_x, self.max_y),
        ]
    }
}

impl<T: PartialOrd + Copy> BoundingBox<T> {
    /// Degenerate box around a single point.
    pub fn from_point(point: Vec2<T>) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Smallest box enclosing all points, or `None` when there are none.
    pub fn from_points<I: IntoIterator<Item = Vec2<T>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |bbox, point| bbox.include(point)))
    }

    /// Grow the box so it also encloses `point`.
    pub fn include(self, point: Vec2<T>) -> Self {
        let min = self.min().min(point);
        let max = self.max().max(point);
        Self::new(min.x, min.y, max.x, max.y)
    }
}

impl<T: std::ops::Sub<Output = T> + Copy> BoundingBox<T> {
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }
}
