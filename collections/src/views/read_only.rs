use crate::array_list::ArrayList;
use crate::error::{ListError, ListResult};
use crate::list::{Comparator, Element, List, ListFlags, Version};

/// Forwards reads to the wrapped list and rejects every mutation with
/// [`ListError::Unsupported`].
///
/// Since nothing can be added or removed through it, the view also reports
/// [`ListFlags::FIXED_SIZE`].
///
/// Cloning a `ReadOnlyView` wraps a clone of the inner list.
#[derive(Debug, Clone)]
pub struct ReadOnlyView<L> {
    inner: L,
}

impl<L> ReadOnlyView<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &L {
        &self.inner
    }

    /// Direct access to the wrapped list, bypassing the read-only check.
    pub fn get_mut(&mut self) -> &mut L {
        &mut self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

fn rejected<R>(operation: &'static str) -> ListResult<R> {
    tracing::debug!(operation, "rejected mutation of a read-only list");
    Err(ListError::read_only(operation))
}

impl<T: Element, L: List<T>> List<T> for ReadOnlyView<L> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn set_capacity(&mut self, _capacity: usize) -> ListResult<()> {
        rejected("set_capacity")
    }

    fn trim_to_size(&mut self) -> ListResult<()> {
        rejected("trim_to_size")
    }

    fn version(&self) -> Version {
        self.inner.version()
    }

    fn flags(&self) -> ListFlags {
        self.inner.flags() | ListFlags::READ_ONLY | ListFlags::FIXED_SIZE
    }

    fn get(&self, index: usize) -> ListResult<T> {
        self.inner.get(index)
    }

    fn set(&mut self, _index: usize, _value: T) -> ListResult<()> {
        rejected("set")
    }

    fn add(&mut self, _value: T) -> ListResult<usize> {
        rejected("add")
    }

    fn add_range(&mut self, _items: &[T]) -> ListResult<()> {
        rejected("add_range")
    }

    fn insert(&mut self, _index: usize, _value: T) -> ListResult<()> {
        rejected("insert")
    }

    fn remove_at(&mut self, _index: usize) -> ListResult<T> {
        rejected("remove_at")
    }

    fn remove(&mut self, _value: &T) -> ListResult<bool> {
        rejected("remove")
    }

    fn remove_range(&mut self, _index: usize, _count: usize) -> ListResult<()> {
        rejected("remove_range")
    }

    fn clear(&mut self) -> ListResult<()> {
        rejected("clear")
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.index_of(value)
    }

    fn binary_search_by(&self, value: &T, compare: Comparator<'_, T>) -> Result<usize, usize> {
        self.inner.binary_search_by(value, compare)
    }

    fn sort_by(&mut self, _compare: Comparator<'_, T>) -> ListResult<()> {
        rejected("sort")
    }

    fn sort_range_by(
        &mut self,
        _index: usize,
        _count: usize,
        _compare: Comparator<'_, T>,
    ) -> ListResult<()> {
        rejected("sort")
    }

    fn reverse(&mut self) -> ListResult<()> {
        rejected("reverse")
    }

    fn reverse_range(&mut self, _index: usize, _count: usize) -> ListResult<()> {
        rejected("reverse")
    }

    fn to_vec(&self) -> Vec<T> {
        self.inner.to_vec()
    }

    fn copy_to(&self, target: &mut [T], index: usize) -> ListResult<()> {
        self.inner.copy_to(target, index)
    }

    fn copy(&self) -> ArrayList<T> {
        self.inner.copy()
    }
}
