//! Fusee Math - growable array lists and 2D value types
//!
//! # Overview
//!
//! This crate bundles the collection and linear algebra crates behind one
//! import:
//!
//! - [`ArrayList`] and the [`List`] trait, with fail-fast [`Enumerator`]s
//! - the [`ReadOnlyView`], [`UniqueView`] and [`SynchronizedView`] decorators
//! - the [`Vector2D`] and [`Matrix2D`] payload types
//!
//! # Quick Start
//!
//! ```
//! use fusee_math::{DoubleArrayList, List, ListExt, Matrix2D, Vector2DArrayList, Vector2D};
//!
//! let mut samples = DoubleArrayList::new();
//! samples.add_range(&[2.5, -1.0, 0.75]).unwrap();
//! samples.sort_by(&mut |a, b| a.total_cmp(b)).unwrap();
//! assert_eq!(samples.to_vec(), vec![-1.0, 0.75, 2.5]);
//!
//! let rotate = Matrix2D::new(0.0, -1.0, 1.0, 0.0);
//! let mut points = Vector2DArrayList::new();
//! points.add(rotate * Vector2D::X_AXIS).unwrap();
//! let mut points = points.read_only();
//! assert_eq!(points.get(0).unwrap(), Vector2D::Y_AXIS);
//! assert!(points.add(Vector2D::ZERO).is_err());
//! ```
//!
//! # Element Aliases
//!
//! The list is generic over any `Clone + PartialEq` element. The aliases
//! below name the instantiations used for numeric and geometric payloads.

pub use fusee_collections::{
    ArrayList, Comparator, DEFAULT_CAPACITY, Element, Enumerator, List, ListError, ListExt,
    ListFlags, ListOptions, ListResult, ReadOnlyView, SynchronizedView, UniqueView, Version,
};
pub use fusee_collections::{enumerator, persist, validate};

pub use fusee_linalg::{EPSILON, LinalgError, Matrix2D, Vector2D};

pub type IntArrayList = ArrayList<i32>;
pub type FloatArrayList = ArrayList<f32>;
pub type DoubleArrayList = ArrayList<f64>;
pub type Matrix2DArrayList = ArrayList<Matrix2D>;
pub type Vector2DArrayList = ArrayList<Vector2D>;
