use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinalgError;

/// A 2D vector with `f64` components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X_AXIS: Self = Self::new(1.0, 0.0);
    pub const Y_AXIS: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of `self` and `other`.
    ///
    /// Positive when `other` lies counter-clockwise from `self`.
    pub fn kross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Scales the vector to unit length.
    pub fn normalized(self) -> Result<Self, LinalgError> {
        let length = self.length();
        if length == 0.0 {
            return Err(LinalgError::ZeroLength);
        }
        Ok(self / length)
    }

    /// The vector rotated 90 degrees clockwise: `(y, -x)`.
    pub fn perp(self) -> Self {
        Self::new(self.y, -self.x)
    }

    pub fn unit_perp(self) -> Result<Self, LinalgError> {
        self.perp().normalized()
    }

    /// Component-wise comparison within an absolute `tolerance`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Snaps components within `tolerance` of zero to exactly zero.
    pub fn clamp_zero(self, tolerance: f64) -> Self {
        let snap = |value: f64| if value.abs() <= tolerance { 0.0 } else { value };
        Self::new(snap(self.x), snap(self.y))
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = LinalgError;

    fn try_from(elements: &[f64]) -> Result<Self, Self::Error> {
        match elements {
            [x, y, ..] => Ok(Self::new(*x, *y)),
            _ => Err(LinalgError::TooFewElements {
                expected: 2,
                actual: elements.len(),
            }),
        }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Vector2D {
    type Err = LinalgError;

    /// Parses the `(x, y)` form written by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LinalgError::Parse {
            input: s.to_owned(),
        };
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (x, y) = inner.split_once(',').ok_or_else(malformed)?;
        let x = x.trim().parse().map_err(|_| malformed())?;
        let y = y.trim().parse().map_err(|_| malformed())?;
        Ok(Self::new(x, y))
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<f64> for Vector2D {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<f64> for Vector2D {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

impl Sub<Vector2D> for f64 {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self - rhs.x, self - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs * self
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Component-wise.
impl Div for Vector2D {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Div<Vector2D> for f64 {
    type Output = Vector2D;

    fn div(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self / rhs.x, self / rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
