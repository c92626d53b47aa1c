//! Growable array backed by a contiguous buffer.
//!
//! `ArrayList<T>` tracks its capacity explicitly so growth is deterministic:
//! an exhausted buffer doubles (or starts at the configured default), then
//! grows further if doubling is still not enough for the pending insertion.

use core::fmt;

use crate::error::{ListError, ListResult};
use crate::list::{Comparator, Element, List, ListFlags, Version};
use crate::options::{DEFAULT_CAPACITY, ListOptions};
use crate::validate::{
    check_capacity, check_capacity_limit, check_copy_target, check_index, check_insert_index,
    check_range,
};

/// A growable, index-addressable, mutable sequence of `T`.
///
/// # Example
///
/// ```
/// use fusee_collections::{ArrayList, List};
///
/// let mut list = ArrayList::new();
/// assert_eq!(list.add(7).unwrap(), 0);
/// list.add_range(&[3, 5]).unwrap();
/// list.sort().unwrap();
/// assert_eq!(list.as_slice(), &[3, 5, 7]);
/// assert_eq!(list.binary_search(&4), Err(1));
/// ```
pub struct ArrayList<T> {
    items: Vec<T>,
    // Logical buffer size. The Vec's own allocation is always at least this big.
    capacity: usize,
    default_capacity: usize,
    version: Version,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with the default capacity of 16.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with a buffer of exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            default_capacity: DEFAULT_CAPACITY,
            version: Version::fresh(),
        }
    }

    pub fn with_options(options: ListOptions) -> ListResult<Self> {
        if options.default_capacity == 0 {
            return Err(ListError::InvalidArgument {
                name: "default_capacity",
                reason: "value must be greater than zero",
            });
        }
        let mut list = Self::with_capacity(options.initial_capacity);
        list.default_capacity = options.default_capacity;
        Ok(list)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    // Leaves the list untouched when the buffer cannot be allocated.
    fn reallocate(&mut self, capacity: usize) -> ListResult<()> {
        check_capacity_limit::<T>(capacity)?;
        tracing::trace!(from = self.capacity, to = capacity, "reallocating list buffer");
        if capacity > self.items.capacity() {
            self.items
                .try_reserve_exact(capacity - self.items.len())
                .map_err(ListError::Allocation)?;
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
        Ok(())
    }

    fn ensure_capacity(&mut self, minimum: usize) -> ListResult<()> {
        let mut capacity = if self.capacity == 0 {
            self.default_capacity
        } else {
            self.capacity.saturating_mul(2)
        };
        if capacity < minimum {
            capacity = minimum;
        }
        // Doubling can overshoot what the allocator will hand out even when
        // the exact size fits.
        match self.reallocate(capacity) {
            Err(err) if capacity > minimum => {
                tracing::debug!(%err, capacity, minimum, "growth failed, retrying exact size");
                self.reallocate(minimum)
            }
            result => result,
        }
    }

    // Room for `additional` more elements, growing at most once.
    fn reserve_for(&mut self, additional: usize) -> ListResult<()> {
        let required = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(ListError::InvalidArgument {
                name: "capacity",
                reason: "required capacity overflows usize",
            })?;
        if required > self.capacity {
            self.ensure_capacity(required)?;
        }
        Ok(())
    }
}

impl<T: Clone> ArrayList<T> {
    /// Creates a list holding a copy of `items`, with capacity equal to its length.
    pub fn from_slice(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T: Element> List<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn set_capacity(&mut self, capacity: usize) -> ListResult<()> {
        if capacity == self.capacity {
            return Ok(());
        }
        check_capacity(capacity, self.items.len())?;
        if capacity == 0 {
            self.reallocate(self.default_capacity)
        } else {
            self.reallocate(capacity)
        }
    }

    fn trim_to_size(&mut self) -> ListResult<()> {
        self.set_capacity(self.items.len())
    }

    fn version(&self) -> Version {
        self.version
    }

    fn flags(&self) -> ListFlags {
        ListFlags::empty()
    }

    fn get(&self, index: usize) -> ListResult<T> {
        check_index(index, self.items.len())?;
        Ok(self.items[index].clone())
    }

    fn set(&mut self, index: usize, value: T) -> ListResult<()> {
        check_index(index, self.items.len())?;
        self.version.bump();
        self.items[index] = value;
        Ok(())
    }

    fn add(&mut self, value: T) -> ListResult<usize> {
        self.reserve_for(1)?;
        self.version.bump();
        self.items.push(value);
        Ok(self.items.len() - 1)
    }

    fn add_range(&mut self, items: &[T]) -> ListResult<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.reserve_for(items.len())?;
        self.version.bump();
        self.items.extend_from_slice(items);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> ListResult<()> {
        check_insert_index(index, self.items.len())?;
        self.reserve_for(1)?;
        self.version.bump();
        self.items.insert(index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> ListResult<T> {
        check_index(index, self.items.len())?;
        self.version.bump();
        Ok(self.items.remove(index))
    }

    fn remove(&mut self, value: &T) -> ListResult<bool> {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    fn remove_range(&mut self, index: usize, count: usize) -> ListResult<()> {
        check_range(index, count, self.items.len())?;
        if count == 0 {
            return Ok(());
        }
        self.version.bump();
        self.items.drain(index..index + count);
        Ok(())
    }

    fn clear(&mut self) -> ListResult<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        self.version.bump();
        self.items.clear();
        Ok(())
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    fn binary_search_by(&self, value: &T, compare: Comparator<'_, T>) -> Result<usize, usize> {
        self.items.binary_search_by(|probe| compare(probe, value))
    }

    fn sort_by(&mut self, compare: Comparator<'_, T>) -> ListResult<()> {
        let len = self.items.len();
        self.sort_range_by(0, len, compare)
    }

    fn sort_range_by(
        &mut self,
        index: usize,
        count: usize,
        compare: Comparator<'_, T>,
    ) -> ListResult<()> {
        check_range(index, count, self.items.len())?;
        if count <= 1 {
            return Ok(());
        }
        self.version.bump();
        self.items[index..index + count].sort_by(|a, b| compare(a, b));
        Ok(())
    }

    fn reverse(&mut self) -> ListResult<()> {
        let len = self.items.len();
        self.reverse_range(0, len)
    }

    fn reverse_range(&mut self, index: usize, count: usize) -> ListResult<()> {
        check_range(index, count, self.items.len())?;
        if count <= 1 {
            return Ok(());
        }
        self.version.bump();
        self.items[index..index + count].reverse();
        Ok(())
    }

    fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }

    fn copy_to(&self, target: &mut [T], index: usize) -> ListResult<()> {
        check_copy_target(target.len(), index, self.items.len())?;
        target[index..index + self.items.len()].clone_from_slice(&self.items);
        Ok(())
    }

    fn copy(&self) -> ArrayList<T> {
        self.clone()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the elements into a buffer sized to fit them. The mutation count
/// carries over, but the copy is a distinct list: enumerators of the original
/// are rejected by it.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::from(self.items.clone());
        list.default_capacity = self.default_capacity;
        list.version = self.version.detached();
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .field("version", &self.version.get())
            .finish()
    }
}

/// Lists compare by their elements only.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        let mut items = items;
        items.shrink_to(capacity);
        Self {
            items,
            capacity,
            default_capacity: DEFAULT_CAPACITY,
            version: Version::fresh(),
        }
    }
}

impl<T> From<ArrayList<T>> for Vec<T> {
    fn from(list: ArrayList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Appends like [`List::add_range`]: one growth step and one version bump.
///
/// # Panics
///
/// Panics if the grown buffer cannot be allocated, like [`Vec::extend`]. Use
/// [`List::add_range`] to get an error instead.
impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<T> = iter.into_iter().collect();
        if items.is_empty() {
            return;
        }
        if let Err(err) = self.reserve_for(items.len()) {
            panic!("cannot extend list: {err}");
        }
        self.version.bump();
        self.items.extend(items);
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
