//! The abstract list contract shared by [`ArrayList`] and every view.
//!
//! Views wrap anything that implements [`List`], including `&mut L` and
//! `Box<L>`, so a view can either own the list it decorates or borrow it for
//! a shorter scope:
//!
//! ```
//! use fusee_collections::{ArrayList, List, ListExt};
//!
//! let mut base = ArrayList::from_slice(&[3, 1, 2]);
//! {
//!     let mut view = (&mut base).read_only();
//!     assert!(view.add(4).is_err());
//!     assert_eq!(view.get(0).unwrap(), 3);
//! }
//! base.sort().unwrap();
//! assert_eq!(base.as_slice(), &[1, 2, 3]);
//! ```

use core::cmp::Ordering;
use core::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::array_list::ArrayList;
use crate::enumerator::Enumerator;
use crate::error::ListResult;
use crate::views::{ReadOnlyView, SynchronizedView, UniqueView};

/// Capabilities every payload type must have: value copies and equality.
///
/// Ordering is only needed by [`List::sort`] and [`List::binary_search`];
/// types without a total order (such as `f32`) use the `_by` variants with an
/// explicit comparator.
pub trait Element: Clone + PartialEq {}

impl<T: Clone + PartialEq> Element for T {}

/// Two-argument comparator returning the relative order of its inputs.
pub type Comparator<'c, T> = &'c mut dyn FnMut(&T, &T) -> Ordering;

/// Mutation counter used to invalidate outstanding enumerators.
///
/// Pairs a process-unique list identity with the number of completed
/// mutations, so a version taken from one list never matches another list,
/// including a clone or a decoded copy of it. Only compared for equality. A
/// `u64` counter cannot realistically wrap, so a stale enumerator is never
/// validated again by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    list: u64,
    count: u64,
}

static_assertions::assert_eq_size!(Version, (u64, u64));

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

impl Version {
    /// Starting version of a newly created list.
    pub(crate) fn fresh() -> Self {
        Self {
            list: NEXT_LIST_ID.fetch_add(1, AtomicOrdering::Relaxed),
            count: 0,
        }
    }

    /// Same counter under a new list identity, for copies.
    pub(crate) fn detached(self) -> Self {
        Self {
            count: self.count,
            ..Self::fresh()
        }
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.count += 1;
    }

    /// Number of completed mutations.
    pub fn get(self) -> u64 {
        self.count
    }

    /// Whether both versions were taken from the same list.
    pub fn same_list(self, other: Self) -> bool {
        self.list == other.list
    }
}

bitflags::bitflags! {
    /// Behavioral traits of a list, accumulated through nested views.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ListFlags: u8 {
        const READ_ONLY = 1 << 0;
        const SYNCHRONIZED = 1 << 1;
        const UNIQUE = 1 << 2;
        /// The length cannot change through this list. Set by read-only views.
        const FIXED_SIZE = 1 << 3;
    }
}

/// An ordered, index-addressable, mutable sequence of `T`.
///
/// Every mutation that completes bumps [`version`](List::version) exactly
/// once. Failed calls and the documented no-ops (empty batches, zero-length
/// ranges, sorting or reversing at most one element) leave the version alone.
pub trait List<T: Element> {
    /// Number of stored elements.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the backing buffer. Always `>= len()`.
    fn capacity(&self) -> usize;

    /// Reallocates the buffer to exactly `capacity` elements.
    ///
    /// Fails with `InvalidArgument` if `capacity < len()`. A capacity of zero
    /// resets the buffer to the default minimum instead of emptying it.
    fn set_capacity(&mut self, capacity: usize) -> ListResult<()>;

    /// Shrinks the capacity to the current length.
    fn trim_to_size(&mut self) -> ListResult<()>;

    fn version(&self) -> Version;

    fn flags(&self) -> ListFlags;

    fn get(&self, index: usize) -> ListResult<T>;

    fn set(&mut self, index: usize, value: T) -> ListResult<()>;

    /// Appends `value`, returning the index it was stored at.
    fn add(&mut self, value: T) -> ListResult<usize>;

    /// Appends all of `items` in order, growing the buffer at most once.
    fn add_range(&mut self, items: &[T]) -> ListResult<()>;

    /// Inserts `value` at `index`, shifting the tail right. `index` may equal
    /// `len()`.
    fn insert(&mut self, index: usize, value: T) -> ListResult<()>;

    /// Removes and returns the element at `index`, shifting the tail left.
    fn remove_at(&mut self, index: usize) -> ListResult<T>;

    /// Removes the first element equal to `value`. Returns whether one was found.
    fn remove(&mut self, value: &T) -> ListResult<bool>;

    fn remove_range(&mut self, index: usize, count: usize) -> ListResult<()>;

    fn clear(&mut self) -> ListResult<()>;

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>;

    fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Searches a list sorted under `compare`.
    ///
    /// Returns `Ok(index)` of a matching element, or `Err(insertion_point)`
    /// where `value` could be inserted while keeping the order. The result is
    /// unspecified if the list is not sorted.
    fn binary_search_by(&self, value: &T, compare: Comparator<'_, T>) -> Result<usize, usize>;

    fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search_by(value, &mut |a: &T, b: &T| a.cmp(b))
    }

    fn sort_by(&mut self, compare: Comparator<'_, T>) -> ListResult<()>;

    /// Sorts `[index, index + count)` in place.
    fn sort_range_by(&mut self, index: usize, count: usize, compare: Comparator<'_, T>)
    -> ListResult<()>;

    fn sort(&mut self) -> ListResult<()>
    where
        T: Ord,
    {
        self.sort_by(&mut |a: &T, b: &T| a.cmp(b))
    }

    fn sort_range(&mut self, index: usize, count: usize) -> ListResult<()>
    where
        T: Ord,
    {
        self.sort_range_by(index, count, &mut |a: &T, b: &T| a.cmp(b))
    }

    fn reverse(&mut self) -> ListResult<()>;

    fn reverse_range(&mut self, index: usize, count: usize) -> ListResult<()>;

    /// Freshly allocated copy of the stored elements.
    fn to_vec(&self) -> Vec<T>;

    /// Copies every element into `target` starting at `index`.
    fn copy_to(&self, target: &mut [T], index: usize) -> ListResult<()>;

    /// Plain, unwrapped copy of the elements. Views are stripped.
    fn copy(&self) -> ArrayList<T>;

    /// Fail-fast cursor bound to the current version.
    fn enumerator(&self) -> Enumerator {
        Enumerator::new(self.version())
    }
}

macro_rules! forward_list_methods {
    () => {
        fn len(&self) -> usize {
            (**self).len()
        }

        fn capacity(&self) -> usize {
            (**self).capacity()
        }

        fn set_capacity(&mut self, capacity: usize) -> ListResult<()> {
            (**self).set_capacity(capacity)
        }

        fn trim_to_size(&mut self) -> ListResult<()> {
            (**self).trim_to_size()
        }

        fn version(&self) -> Version {
            (**self).version()
        }

        fn flags(&self) -> ListFlags {
            (**self).flags()
        }

        fn get(&self, index: usize) -> ListResult<T> {
            (**self).get(index)
        }

        fn set(&mut self, index: usize, value: T) -> ListResult<()> {
            (**self).set(index, value)
        }

        fn add(&mut self, value: T) -> ListResult<usize> {
            (**self).add(value)
        }

        fn add_range(&mut self, items: &[T]) -> ListResult<()> {
            (**self).add_range(items)
        }

        fn insert(&mut self, index: usize, value: T) -> ListResult<()> {
            (**self).insert(index, value)
        }

        fn remove_at(&mut self, index: usize) -> ListResult<T> {
            (**self).remove_at(index)
        }

        fn remove(&mut self, value: &T) -> ListResult<bool> {
            (**self).remove(value)
        }

        fn remove_range(&mut self, index: usize, count: usize) -> ListResult<()> {
            (**self).remove_range(index, count)
        }

        fn clear(&mut self) -> ListResult<()> {
            (**self).clear()
        }

        fn index_of(&self, value: &T) -> Option<usize> {
            (**self).index_of(value)
        }

        fn binary_search_by(&self, value: &T, compare: Comparator<'_, T>) -> Result<usize, usize> {
            (**self).binary_search_by(value, compare)
        }

        fn sort_by(&mut self, compare: Comparator<'_, T>) -> ListResult<()> {
            (**self).sort_by(compare)
        }

        fn sort_range_by(
            &mut self,
            index: usize,
            count: usize,
            compare: Comparator<'_, T>,
        ) -> ListResult<()> {
            (**self).sort_range_by(index, count, compare)
        }

        fn reverse(&mut self) -> ListResult<()> {
            (**self).reverse()
        }

        fn reverse_range(&mut self, index: usize, count: usize) -> ListResult<()> {
            (**self).reverse_range(index, count)
        }

        fn to_vec(&self) -> Vec<T> {
            (**self).to_vec()
        }

        fn copy_to(&self, target: &mut [T], index: usize) -> ListResult<()> {
            (**self).copy_to(target, index)
        }

        fn copy(&self) -> ArrayList<T> {
            (**self).copy()
        }
    };
}

impl<T: Element, L: List<T> + ?Sized> List<T> for &mut L {
    forward_list_methods!();
}

impl<T: Element, L: List<T> + ?Sized> List<T> for Box<L> {
    forward_list_methods!();
}

/// Chaining constructors for the views.
///
/// ```
/// use fusee_collections::{ArrayList, List, ListExt, ListFlags};
///
/// let list = ArrayList::from_slice(&[1, 2, 3]).unique().unwrap().synchronized();
/// assert!(list.flags().contains(ListFlags::UNIQUE | ListFlags::SYNCHRONIZED));
/// ```
pub trait ListExt<T: Element>: List<T> + Sized {
    fn read_only(self) -> ReadOnlyView<Self> {
        ReadOnlyView::new(self)
    }

    /// Fails with `InvalidArgument` if the list already holds duplicates.
    fn unique(self) -> ListResult<UniqueView<Self>> {
        UniqueView::new(self)
    }

    /// Always adds a lock. Use the inherent
    /// [`SynchronizedView::synchronized`] to reuse an existing one.
    fn synchronized(self) -> SynchronizedView<Self> {
        SynchronizedView::new(self)
    }
}

impl<T: Element, L: List<T>> ListExt<T> for L {}
