//! Two-dimensional vector and matrix value types.
//!
//! Both types are `Copy` payloads with `f64` components, suitable as
//! elements of a `fusee_collections::ArrayList`.
//!
//! ```
//! use fusee_linalg::{Matrix2D, Vector2D};
//!
//! let rotate = Matrix2D::new(0.0, -1.0, 1.0, 0.0);
//! assert_eq!(rotate * Vector2D::X_AXIS, Vector2D::Y_AXIS);
//! assert_eq!((rotate * rotate).determinant(), 1.0);
//! ```

pub mod error;
pub mod matrix2;
pub mod vector2;

pub use error::LinalgError;
pub use matrix2::Matrix2D;
pub use vector2::Vector2D;

/// Default tolerance for [`Vector2D::approx_eq`] (four ulps at 1.0).
pub const EPSILON: f64 = 4.0 * f64::EPSILON;
