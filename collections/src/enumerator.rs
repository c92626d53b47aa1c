//! Fail-fast enumeration that detects modification of the underlying list.
//!
//! An [`Enumerator`] does not borrow its list. It remembers the list's
//! [`Version`] at creation and a cursor, and each step is driven with the list
//! passed back in. The version identifies the list it came from, so passing
//! any other list (a clone included) fails. The list stays mutable in between, and any completed
//! mutation permanently invalidates the enumerator:
//!
//! ```
//! use fusee_collections::{ArrayList, List, ListError};
//!
//! let mut list = ArrayList::from_slice(&[10, 20]);
//! let mut cursor = list.enumerator();
//! assert!(cursor.move_next(&list).unwrap());
//! assert_eq!(cursor.current(&list).unwrap(), 10);
//!
//! list.add(30).unwrap();
//! assert!(matches!(cursor.move_next(&list), Err(ListError::InvalidOperation(_))));
//! ```

use core::marker::PhantomData;

use crate::error::{ListError, ListResult};
use crate::list::{Element, List, Version};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    captured_version: Version,
    // `None` is the "before first" position.
    cursor: Option<usize>,
}

impl Enumerator {
    pub fn new(version: Version) -> Self {
        Self {
            captured_version: version,
            cursor: None,
        }
    }

    pub fn captured_version(&self) -> Version {
        self.captured_version
    }

    fn check_version<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> ListResult<()> {
        let current = list.version();
        if !current.same_list(self.captured_version) {
            tracing::debug!("enumerator driven with a different list");
            return Err(ListError::InvalidOperation(
                "enumerator belongs to a different list",
            ));
        }
        if current != self.captured_version {
            tracing::debug!(
                captured = self.captured_version.get(),
                current = current.get(),
                "enumerator invalidated"
            );
            return Err(ListError::InvalidOperation(
                "enumerator invalidated by modification to the list",
            ));
        }
        Ok(())
    }

    /// Advances the cursor. Returns `false` once it moves past the last element.
    pub fn move_next<T: Element, L: List<T> + ?Sized>(&mut self, list: &L) -> ListResult<bool> {
        self.check_version(list)?;
        let next = self.cursor.map_or(0, |cursor| cursor.saturating_add(1));
        self.cursor = Some(next);
        Ok(next < list.len())
    }

    /// Element under the cursor.
    pub fn current<T: Element, L: List<T> + ?Sized>(&self, list: &L) -> ListResult<T> {
        self.check_version(list)?;
        match self.cursor {
            Some(index) if index < list.len() => list.get(index),
            _ => Err(ListError::InvalidOperation(
                "enumerator is not positioned on an element",
            )),
        }
    }

    /// Moves the cursor back before the first element.
    pub fn reset<T: Element, L: List<T> + ?Sized>(&mut self, list: &L) -> ListResult<()> {
        self.check_version(list)?;
        self.cursor = None;
        Ok(())
    }

    /// Adapts the enumerator to an [`Iterator`] over `list`.
    ///
    /// Yields `Err` once if the list changes underneath it (possible through a
    /// shared [`SynchronizedView`](crate::SynchronizedView) handle) and then stops.
    pub fn iter<T: Element, L: List<T> + ?Sized>(self, list: &L) -> Iter<'_, T, L> {
        Iter {
            enumerator: self,
            list,
            done: false,
            _marker: PhantomData,
        }
    }
}

pub struct Iter<'a, T, L: ?Sized> {
    enumerator: Enumerator,
    list: &'a L,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element, L: List<T> + ?Sized> Iterator for Iter<'_, T, L> {
    type Item = ListResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = match self.enumerator.move_next(self.list) {
            Ok(true) => self.enumerator.current(self.list),
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(err) => Err(err),
        };
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}
