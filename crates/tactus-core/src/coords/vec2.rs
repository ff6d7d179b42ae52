use core::ops::{Add, Div, Mul, Sub};

/// 2D point in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_to(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle of the ray from `self` towards `other`, in radians within `(-π, π]`.
    ///
    /// Returns `0.0` when both points coincide.
    #[inline]
    pub fn angle_to(self, other: Vec2) -> f32 {
        let d = other - self;
        d.y.atan2(d.x)
    }

    /// Arithmetic mean of `points`, or `None` when the slice is empty.
    pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
        if points.is_empty() {
            return None;
        }
        let sum = points.iter().fold(Vec2::zero(), |acc, p| acc + *p);
        Some(sum / points.len() as f32)
    }

    /// Mean distance from `self` to each of `points`; `0.0` for an empty slice.
    pub fn average_distance_to(self, points: &[Vec2]) -> f32 {
        if points.is_empty() {
            return 0.0;
        }
        let total: f32 = points.iter().map(|p| self.distance_to(*p)).sum();
        total / points.len() as f32
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}
