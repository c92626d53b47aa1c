use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::array_list::ArrayList;
use crate::error::ListResult;
use crate::list::{Comparator, Element, List, ListFlags, Version};

/// Serializes every call to the wrapped list behind one mutex.
///
/// Each call locks for its own duration only, so sequences such as
/// `contains` followed by `add` are not atomic. Hold [`lock`](Self::lock)
/// across the whole sequence when that matters.
///
/// Handles created with [`share`](Self::share) use the same lock and can be
/// moved to other threads:
///
/// ```
/// use std::thread;
/// use fusee_collections::{ArrayList, List, ListExt};
///
/// let list = ArrayList::<u32>::new().synchronized();
/// let workers: Vec<_> = (0..4)
///     .map(|n| {
///         let mut handle = list.share();
///         thread::spawn(move || handle.add(n).unwrap())
///     })
///     .collect();
/// for worker in workers {
///     worker.join().unwrap();
/// }
/// assert_eq!(list.len(), 4);
/// ```
#[derive(Debug)]
pub struct SynchronizedView<L> {
    inner: Arc<Mutex<L>>,
}

impl<L> SynchronizedView<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Another handle to the same list, guarded by the same lock.
    pub fn share(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Already synchronized: returns the view itself instead of nesting a
    /// second lock.
    ///
    /// Reuse only happens through this inherent method on a bare
    /// `SynchronizedView`. [`ListExt::synchronized`](crate::ListExt::synchronized)
    /// called generically, or on a view stacked over a synchronized list
    /// (such as `ReadOnlyView<SynchronizedView<_>>`), wraps the list in a new
    /// lock.
    /// Calls then take the outer lock before the inner one, always in that
    /// order, so the nesting costs an extra acquisition but cannot deadlock.
    pub fn synchronized(self) -> Self {
        self
    }

    /// Acquires the lock for a multi-call sequence.
    ///
    /// Calling any method on this view (or a shared handle) from the same
    /// thread while the guard is alive deadlocks; use the guard instead.
    pub fn lock(&self) -> MutexGuard<'_, L> {
        self.inner.lock()
    }

    /// Whether both handles guard the same list.
    pub fn shares_lock_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Unwraps the list if this is the last handle, otherwise returns the handle.
    pub fn into_inner(self) -> Result<L, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}

/// Wraps a clone of the inner list under a fresh lock.
impl<L: Clone> Clone for SynchronizedView<L> {
    fn clone(&self) -> Self {
        Self::new(self.lock().clone())
    }
}

impl<T: Element, L: List<T>> List<T> for SynchronizedView<L> {
    fn len(&self) -> usize {
        self.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    fn set_capacity(&mut self, capacity: usize) -> ListResult<()> {
        self.lock().set_capacity(capacity)
    }

    fn trim_to_size(&mut self) -> ListResult<()> {
        self.lock().trim_to_size()
    }

    fn version(&self) -> Version {
        self.lock().version()
    }

    fn flags(&self) -> ListFlags {
        self.lock().flags() | ListFlags::SYNCHRONIZED
    }

    fn get(&self, index: usize) -> ListResult<T> {
        self.lock().get(index)
    }

    fn set(&mut self, index: usize, value: T) -> ListResult<()> {
        self.lock().set(index, value)
    }

    fn add(&mut self, value: T) -> ListResult<usize> {
        self.lock().add(value)
    }

    fn add_range(&mut self, items: &[T]) -> ListResult<()> {
        self.lock().add_range(items)
    }

    fn insert(&mut self, index: usize, value: T) -> ListResult<()> {
        self.lock().insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> ListResult<T> {
        self.lock().remove_at(index)
    }

    fn remove(&mut self, value: &T) -> ListResult<bool> {
        self.lock().remove(value)
    }

    fn remove_range(&mut self, index: usize, count: usize) -> ListResult<()> {
        self.lock().remove_range(index, count)
    }

    fn clear(&mut self) -> ListResult<()> {
        self.lock().clear()
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.lock().index_of(value)
    }

    fn contains(&self, value: &T) -> bool {
        self.lock().contains(value)
    }

    fn binary_search_by(&self, value: &T, compare: Comparator<'_, T>) -> Result<usize, usize> {
        self.lock().binary_search_by(value, compare)
    }

    fn sort_by(&mut self, compare: Comparator<'_, T>) -> ListResult<()> {
        self.lock().sort_by(compare)
    }

    fn sort_range_by(
        &mut self,
        index: usize,
        count: usize,
        compare: Comparator<'_, T>,
    ) -> ListResult<()> {
        self.lock().sort_range_by(index, count, compare)
    }

    fn reverse(&mut self) -> ListResult<()> {
        self.lock().reverse()
    }

    fn reverse_range(&mut self, index: usize, count: usize) -> ListResult<()> {
        self.lock().reverse_range(index, count)
    }

    fn to_vec(&self) -> Vec<T> {
        self.lock().to_vec()
    }

    fn copy_to(&self, target: &mut [T], index: usize) -> ListResult<()> {
        self.lock().copy_to(target, index)
    }

    fn copy(&self) -> ArrayList<T> {
        self.lock().copy()
    }
}

static_assertions::assert_impl_all!(SynchronizedView<ArrayList<i32>>: Send, Sync);
