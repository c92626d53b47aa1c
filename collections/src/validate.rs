//! Argument checks shared by [`ArrayList`](crate::ArrayList) and the views.

use crate::error::{ListError, ListResult};

/// Index must address an existing element.
#[inline]
pub fn check_index(index: usize, len: usize) -> ListResult<()> {
    if index >= len {
        return Err(ListError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Insertion may also target the position right after the last element.
#[inline]
pub fn check_insert_index(index: usize, len: usize) -> ListResult<()> {
    if index > len {
        return Err(ListError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// `[index, index + count)` must lie within `[0, len)`.
#[inline]
pub fn check_range(index: usize, count: usize, len: usize) -> ListResult<()> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(ListError::InvalidRange { index, count, len }),
    }
}

/// Capacity can never drop below the number of stored elements.
#[inline]
pub fn check_capacity(capacity: usize, len: usize) -> ListResult<()> {
    if capacity < len {
        return Err(ListError::InvalidArgument {
            name: "capacity",
            reason: "value cannot be less than the list length",
        });
    }
    Ok(())
}

/// A buffer of `capacity` elements of `T` must fit in `isize::MAX` bytes.
///
/// Checked before any allocation is attempted, so absurd capacities (for
/// example from forged persisted data) fail without touching the allocator.
#[inline]
pub fn check_capacity_limit<T>(capacity: usize) -> ListResult<()> {
    let element_size = core::mem::size_of::<T>();
    if element_size == 0 {
        return Ok(());
    }
    match capacity.checked_mul(element_size) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(()),
        _ => Err(ListError::InvalidArgument {
            name: "capacity",
            reason: "value exceeds the maximum buffer size",
        }),
    }
}

/// The target slice must have room for `len` elements starting at `index`.
pub fn check_copy_target(target_len: usize, index: usize, len: usize) -> ListResult<()> {
    if index > target_len || (index == target_len && len > 0) {
        return Err(ListError::InvalidArgument {
            name: "index",
            reason: "value must be less than the target length",
        });
    }
    if len > target_len - index {
        return Err(ListError::InvalidRange {
            index,
            count: len,
            len: target_len,
        });
    }
    Ok(())
}
