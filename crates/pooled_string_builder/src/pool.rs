// crates/pooled_string_builder/src/pool.rs

use std::cell::RefCell;

/// Upper bound on buffers kept per thread. Releasing beyond this simply
/// drops the buffer.
pub(crate) const MAX_POOLED: usize = 8;

/// Buffers that grew past this capacity are dropped on release instead of
/// pooled, so one oversized build does not pin memory for the rest of the
/// thread's lifetime. Matches the ceiling of the callers' capacity heuristic.
pub(crate) const MAX_RETAINED_CAPACITY: usize = 4096;

thread_local! {
    static FREE_LIST: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Takes the most recently released buffer, or allocates a fresh one.
/// The returned buffer is always empty and holds at least `capacity` bytes.
pub(crate) fn rent(capacity: usize) -> String {
    match FREE_LIST.with(|list| list.borrow_mut().pop()) {
        Some(mut buf) => {
            log::trace!("reusing pooled buffer (capacity {})", buf.capacity());
            buf.clear();
            buf.reserve(capacity);
            buf
        }
        None => {
            log::trace!("pool empty, allocating a buffer (capacity {})", capacity);
            String::with_capacity(capacity)
        }
    }
}

/// Clears a buffer and returns it to the thread's free list, unless it is
/// useless (zero capacity), oversized, or the list is already full.
pub(crate) fn release(mut buf: String) {
    if buf.capacity() == 0 || buf.capacity() > MAX_RETAINED_CAPACITY {
        log::trace!("discarding buffer (capacity {})", buf.capacity());
        return;
    }
    buf.clear();
    FREE_LIST.with(|list| {
        let mut list = list.borrow_mut();
        if list.len() < MAX_POOLED {
            list.push(buf);
        } else {
            log::trace!("free list full, discarding buffer");
        }
    });
}
