//! Growable array lists with versioned enumeration and composable views.
//!
//! # Overview
//!
//! [`ArrayList<T>`] is a contiguous, index-addressable sequence with explicit
//! capacity control and amortized O(1) appends. Every completed mutation bumps
//! a [`Version`] counter, which [`Enumerator`]s compare against to fail fast
//! when the list changes under them.
//!
//! Three views decorate any [`List`] by delegation and nest in any order:
//!
//! - [`ReadOnlyView`] rejects every mutation.
//! - [`UniqueView`] rejects insertions that would duplicate an element.
//! - [`SynchronizedView`] serializes each call behind one mutex.
//!
//! ```
//! use fusee_collections::{ArrayList, List, ListError, ListExt};
//!
//! let mut list = ArrayList::from_slice(&[1, 2, 3]).unique().unwrap();
//! assert!(matches!(list.add(2), Err(ListError::Unsupported { .. })));
//! assert_eq!(list.add(4).unwrap(), 3);
//!
//! let frozen = list.read_only();
//! assert_eq!(frozen.to_vec(), vec![1, 2, 3, 4]);
//! ```

pub mod array_list;
pub mod enumerator;
pub mod error;
pub mod list;
pub mod options;
pub mod persist;
pub mod validate;
pub mod views;

pub use array_list::ArrayList;
pub use enumerator::Enumerator;
pub use error::{ListError, ListResult};
pub use list::{Comparator, Element, List, ListExt, ListFlags, Version};
pub use options::{DEFAULT_CAPACITY, ListOptions};
pub use views::{ReadOnlyView, SynchronizedView, UniqueView};
