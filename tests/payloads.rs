//! Lists of geometric payloads through the facade.

use fusee_math::{
    DoubleArrayList, FloatArrayList, IntArrayList, List, ListError, ListExt, Matrix2D,
    Matrix2DArrayList, Vector2D, Vector2DArrayList,
};
use pretty_assertions::assert_eq;

#[test]
fn test_vector_list_round_trip() {
    let mut points = Vector2DArrayList::with_capacity(4);
    points
        .add_range(&[Vector2D::X_AXIS, Vector2D::new(2.0, -3.5)])
        .unwrap();

    let decoded = Vector2DArrayList::from_bytes(&points.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, points);
    assert_eq!(decoded.capacity(), 4);
}

#[test]
fn test_matrix_list_transforms() {
    let mut stack = Matrix2DArrayList::new();
    stack.add(Matrix2D::new(2.0, 0.0, 0.0, 2.0)).unwrap();
    stack.add(Matrix2D::new(0.0, -1.0, 1.0, 0.0)).unwrap();

    let combined = stack
        .iter()
        .fold(Matrix2D::IDENTITY, |acc, m| acc * *m);
    assert_eq!(combined * Vector2D::X_AXIS, Vector2D::new(0.0, 2.0));
    assert_eq!(stack.index_of(&Matrix2D::IDENTITY), None);
}

#[test]
fn test_unique_vectors() {
    let mut points = Vector2DArrayList::new().unique().unwrap();
    points.add(Vector2D::ZERO).unwrap();
    assert!(matches!(
        points.add(Vector2D::new(0.0, -0.0)),
        Err(ListError::Unsupported { .. })
    ));
    assert_eq!(points.len(), 1);
}

#[test]
fn test_numeric_aliases() {
    let mut ints: IntArrayList = (1..=4).rev().collect();
    ints.sort().unwrap();
    assert_eq!(ints.binary_search(&3), Ok(2));

    let mut floats = FloatArrayList::from_slice(&[0.5, f32::NAN, -1.0]);
    floats.sort_by(&mut |a, b| a.total_cmp(b)).unwrap();
    assert_eq!(floats.get(0).unwrap(), -1.0);
    assert!(floats.get(2).unwrap().is_nan());

    let doubles = DoubleArrayList::from_slice(&[1.0, 2.0]).synchronized();
    assert_eq!(doubles.to_vec().iter().sum::<f64>(), 3.0);
}
