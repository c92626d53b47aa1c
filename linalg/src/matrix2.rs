use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::LinalgError;
use crate::vector2::Vector2D;

/// A row-major 2x2 matrix with `f64` elements.
///
/// Flat indices run `0 => m11, 1 => m12, 2 => m21, 3 => m22`, and
/// `(row, column)` maps to `row * 2 + column`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix2D {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
}

impl Matrix2D {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64) -> Self {
        Self { m11, m12, m21, m22 }
    }

    pub const fn from_columns(column1: Vector2D, column2: Vector2D) -> Self {
        Self::new(column1.x, column2.x, column1.y, column2.y)
    }

    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f64 {
        self.m11 + self.m22
    }

    pub fn transposed(self) -> Self {
        Self::new(self.m11, self.m21, self.m12, self.m22)
    }

    pub fn transpose(&mut self) {
        core::mem::swap(&mut self.m12, &mut self.m21);
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.m11),
            1 => Some(self.m12),
            2 => Some(self.m21),
            3 => Some(self.m22),
            _ => None,
        }
    }

    pub fn get_rc(&self, row: usize, column: usize) -> Option<f64> {
        if row < 2 && column < 2 {
            self.get(row * 2 + column)
        } else {
            None
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.m11, self.m12, self.m21, self.m22]
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.m11), f(self.m12), f(self.m21), f(self.m22))
    }

    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.m11, other.m11),
            f(self.m12, other.m12),
            f(self.m21, other.m21),
            f(self.m22, other.m22),
        )
    }
}

impl From<[f64; 4]> for Matrix2D {
    fn from([m11, m12, m21, m22]: [f64; 4]) -> Self {
        Self::new(m11, m12, m21, m22)
    }
}

/// Reads the first four elements in row-major order; extra elements are ignored.
impl TryFrom<&[f64]> for Matrix2D {
    type Error = LinalgError;

    fn try_from(elements: &[f64]) -> Result<Self, Self::Error> {
        match elements {
            [m11, m12, m21, m22, ..] => Ok(Self::new(*m11, *m12, *m21, *m22)),
            _ => Err(LinalgError::TooFewElements {
                expected: 4,
                actual: elements.len(),
            }),
        }
    }
}

impl fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|{}, {}|", self.m11, self.m12)?;
        writeln!(f, "|{}, {}|", self.m21, self.m22)
    }
}

impl Index<usize> for Matrix2D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.m11,
            1 => &self.m12,
            2 => &self.m21,
            3 => &self.m22,
            _ => panic!("index {index} out of range for a 2x2 matrix"),
        }
    }
}

impl IndexMut<usize> for Matrix2D {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.m11,
            1 => &mut self.m12,
            2 => &mut self.m21,
            3 => &mut self.m22,
            _ => panic!("index {index} out of range for a 2x2 matrix"),
        }
    }
}

impl Index<(usize, usize)> for Matrix2D {
    type Output = f64;

    fn index(&self, (row, column): (usize, usize)) -> &f64 {
        assert!(row < 2 && column < 2, "({row}, {column}) out of range for a 2x2 matrix");
        &self[row * 2 + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix2D {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f64 {
        assert!(row < 2 && column < 2, "({row}, {column}) out of range for a 2x2 matrix");
        &mut self[row * 2 + column]
    }
}

impl Add for Matrix2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Add<f64> for Matrix2D {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self.map(|a| a + rhs)
    }
}

impl Sub for Matrix2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Sub<f64> for Matrix2D {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self.map(|a| a - rhs)
    }
}

impl Mul for Matrix2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m11 * rhs.m11 + self.m12 * rhs.m21,
            self.m11 * rhs.m12 + self.m12 * rhs.m22,
            self.m21 * rhs.m11 + self.m22 * rhs.m21,
            self.m21 * rhs.m12 + self.m22 * rhs.m22,
        )
    }
}

impl Mul<Vector2D> for Matrix2D {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(
            self.m11 * rhs.x + self.m12 * rhs.y,
            self.m21 * rhs.x + self.m22 * rhs.y,
        )
    }
}

impl Mul<f64> for Matrix2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.map(|a| a * rhs)
    }
}

impl Neg for Matrix2D {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}
