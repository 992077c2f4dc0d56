//! Allocation of delay line stores from a caller-chosen allocator.

use core::alloc::{GlobalAlloc, Layout};

use crate::error::Error;

/// Allocate a zeroed buffer of f32s with a given number of elements.
///
/// The buffer lives for the rest of the program. Use it as the backing store
/// of one [`DelayLineView`](crate::utils::delay_line::DelayLineView), or
/// split it with `split_at_mut` to share one allocation between several.
pub fn allocate_buffer<A: GlobalAlloc>(
    buffer_allocator: &A,
    buffer_length: usize,
) -> Result<&'static mut [f32], Error> {
    if buffer_length == 0 {
        return Err(Error::EmptyBuffer);
    }

    let layout = Layout::array::<f32>(buffer_length).map_err(|_| Error::AllocationFailed {
        length: buffer_length,
    })?;

    // SAFETY: layout has non-zero size, and all-zero bits are a valid f32.
    let buffer = unsafe { buffer_allocator.alloc_zeroed(layout) as *mut f32 };

    if buffer.is_null() {
        log::warn!("Allocation of {} samples failed", buffer_length);
        return Err(Error::AllocationFailed {
            length: buffer_length,
        });
    }

    log::debug!("Allocated delay buffer of {} samples", buffer_length);

    // SAFETY: buffer is non-null, aligned for f32 and zero-initialized for
    // buffer_length elements; it is never freed so 'static holds.
    let buffer: &'static mut [f32] = unsafe { core::slice::from_raw_parts_mut(buffer, buffer_length) };

    Ok(buffer)
}
