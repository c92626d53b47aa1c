//! Decorators that restrict or guard access to a wrapped list.
//!
//! Each view implements [`List`](crate::List) by delegating to the list it
//! wraps, so views nest in any order. Rules apply outer-to-inner: a
//! synchronized view over a unique view locks first, then checks for
//! duplicates.

mod read_only;
mod synchronized;
mod unique;

pub use read_only::ReadOnlyView;
pub use synchronized::SynchronizedView;
pub use unique::UniqueView;

#[cfg(test)]
mod read_only_test;
#[cfg(test)]
mod synchronized_test;
#[cfg(test)]
mod unique_test;
