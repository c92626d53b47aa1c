//! Construction options for [`ArrayList`](crate::ArrayList).

/// Capacity used for the first growth step and by `set_capacity(0)`.
pub const DEFAULT_CAPACITY: usize = 16;

/// Options controlling how an [`ArrayList`](crate::ArrayList) manages its buffer.
///
/// # Example
///
/// ```
/// use fusee_collections::{ArrayList, List, ListOptions};
///
/// let options = ListOptions {
///     default_capacity: 4,
///     initial_capacity: 0,
/// };
/// let mut list = ArrayList::with_options(options).unwrap();
/// list.add(1).unwrap();
/// assert_eq!(list.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Size of the buffer allocated when an empty list first grows, and the
    /// size `set_capacity(0)` resets to. Must be non-zero.
    pub default_capacity: usize,

    /// Capacity reserved when the list is created. May be zero, in which
    /// case the first insertion allocates `default_capacity` elements.
    pub initial_capacity: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}
