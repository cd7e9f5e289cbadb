//! Ordinal-to-position arithmetic for the task list.

use crate::store::StoreError;

/// Resolve a 1-based ordinal into a position in a list of `len` tasks.
///
/// 0 is the unset sentinel. Ordinals past the end are out of range, and
/// anything else that does not land on a task (negative values) is not
/// found.
pub fn resolve(index: i64, len: usize) -> Result<usize, StoreError> {
    if index == 0 {
        return Err(StoreError::MissingIndex);
    }
    if index > 0 && index as u64 > len as u64 {
        return Err(StoreError::IndexOutOfRange { index, len });
    }
    (0..len)
        .find(|&position| position as i64 + 1 == index)
        .ok_or(StoreError::TaskNotFound(index))
}

/// The ordinal shown for a position.
pub fn ordinal(position: usize) -> usize {
    position + 1
}
