use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

/// A 2D point or direction, usually in image pixel space.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T: Default> Default for Vec2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default> Vec2<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Mul<Output = T> + Add<Output = T> + Copy> Vec2<T> {
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }
}

impl<T: PartialOrd + Copy> Vec2<T> {
    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self {
            x: if other.x < self.x { other.x } else { self.x },
            y: if other.y < self.y { other.y } else { self.y },
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self {
            x: if other.x > self.x { other.x } else { self.x },
            y: if other.y > self.y { other.y } else { self.y },
        }
    }
}

// --- Float operations (f32) ---

impl Vec2<f32> {
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance_to(self, other: Self) -> f32 {
        (other - self).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Widen to f64 for precision-sensitive math.
    pub fn to_f64(self) -> Vec2<f64> {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

// --- Float operations (f64) ---

impl Vec2<f64> {
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (other - self).length()
    }
}
