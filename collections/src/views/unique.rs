use crate::array_list::ArrayList;
use crate::error::{ListError, ListResult};
use crate::list::{Comparator, Element, List, ListFlags, Version};

/// Forwards every operation but rejects insertions that would duplicate an
/// element already in the list.
///
/// Uniqueness is only enforced for calls made through the view. The wrapped
/// list is still reachable through [`get_mut`](Self::get_mut),
/// [`into_inner`](Self::into_inner), or any other handle to it, and changes
/// made that way are not checked.
#[derive(Debug, Clone)]
pub struct UniqueView<L> {
    inner: L,
}

impl<L> UniqueView<L> {
    /// Wraps `inner` after verifying it holds no duplicates.
    ///
    /// Fails with [`ListError::InvalidArgument`] otherwise.
    pub fn new<T: Element>(inner: L) -> ListResult<Self>
    where
        L: List<T>,
    {
        let items = inner.to_vec();
        for (index, item) in items.iter().enumerate().skip(1) {
            if items[..index].contains(item) {
                return Err(ListError::InvalidArgument {
                    name: "list",
                    reason: "list cannot contain duplicate elements",
                });
            }
        }
        Ok(Self { inner })
    }

    pub fn get_ref(&self) -> &L {
        &self.inner
    }

    /// Direct access to the wrapped list. Mutations made through it are not
    /// checked for duplicates.
    pub fn get_mut(&mut self) -> &mut L {
        &mut self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }

    fn check_unique<T: Element>(&self, operation: &'static str, value: &T) -> ListResult<()>
    where
        L: List<T>,
    {
        if self.inner.contains(value) {
            tracing::debug!(operation, "rejected duplicate element");
            return Err(ListError::duplicate(operation));
        }
        Ok(())
    }
}

impl<T: Element, L: List<T>> List<T> for UniqueView<L> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn set_capacity(&mut self, capacity: usize) -> ListResult<()> {
        self.inner.set_capacity(capacity)
    }

    fn trim_to_size(&mut self) -> ListResult<()> {
        self.inner.trim_to_size()
    }

    fn version(&self) -> Version {
        self.inner.version()
    }

    fn flags(&self) -> ListFlags {
        self.inner.flags() | ListFlags::UNIQUE
    }

    fn get(&self, index: usize) -> ListResult<T> {
        self.inner.get(index)
    }

    /// Replacing an element with itself is allowed.
    fn set(&mut self, index: usize, value: T) -> ListResult<()> {
        match self.inner.index_of(&value) {
            Some(existing) if existing != index => {
                tracing::debug!(index, existing, "rejected duplicate element");
                Err(ListError::duplicate("set"))
            }
            _ => self.inner.set(index, value),
        }
    }

    fn add(&mut self, value: T) -> ListResult<usize> {
        self.check_unique("add", &value)?;
        self.inner.add(value)
    }

    /// Rejects the whole batch if any item is already present or repeats an
    /// earlier item of the batch.
    fn add_range(&mut self, items: &[T]) -> ListResult<()> {
        for (index, item) in items.iter().enumerate() {
            self.check_unique("add_range", item)?;
            if items[..index].contains(item) {
                tracing::debug!(index, "rejected batch with repeated element");
                return Err(ListError::duplicate("add_range"));
            }
        }
        self.inner.add_range(items)
    }

    fn insert(&mut self, index: usize, value: T) -> ListResult<()> {
        self.check_unique("insert", &value)?;
        self.inner.insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> ListResult<T> {
        self.inner.remove_at(index)
    }

    fn remove(&mut self, value: &T) -> ListResult<bool> {
        self.inner.remove(value)
    }

    fn remove_range(&mut self, index: usize, count: usize) -> ListResult<()> {
        self.inner.remove_range(index, count)
    }

    fn clear(&mut self) -> ListResult<()> {
        self.inner.clear()
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.inner.index_of(value)
    }

    fn binary_search_by(&self, value: &T, compare: Comparator<'_, T>) -> Result<usize, usize> {
        self.inner.binary_search_by(value, compare)
    }

    fn sort_by(&mut self, compare: Comparator<'_, T>) -> ListResult<()> {
        self.inner.sort_by(compare)
    }

    fn sort_range_by(
        &mut self,
        index: usize,
        count: usize,
        compare: Comparator<'_, T>,
    ) -> ListResult<()> {
        self.inner.sort_range_by(index, count, compare)
    }

    fn reverse(&mut self) -> ListResult<()> {
        self.inner.reverse()
    }

    fn reverse_range(&mut self, index: usize, count: usize) -> ListResult<()> {
        self.inner.reverse_range(index, count)
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
