// crates/pooled_string_builder/src/lib.rs

//! A string builder that rents its buffer from a per-thread pool and returns
//! it on drop, so tight build-and-finish loops reuse one allocation.

use std::fmt;
use std::mem;

mod pool;

/// A `String` rented from the current thread's pool.
///
/// The buffer goes back to the pool when the builder is dropped, on every
/// exit path including unwinding. [`finish`](PooledStringBuilder::finish)
/// copies the built content out first, so the rented allocation itself never
/// escapes into a caller's hands.
///
/// The pool is thread-local: builders on different threads never contend for
/// or share a buffer, and nested builders on one thread rent distinct ones.
pub struct PooledStringBuilder {
    buf: String,
}

impl PooledStringBuilder {
    /// Rents a buffer with no particular capacity demand.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Rents a buffer that can hold at least `capacity` bytes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: pool::rent(capacity),
        }
    }

    /// Appends a single character.
    pub fn push(&mut self, ch: char) {
        self.buf.push(ch);
    }

    /// Appends a string slice.
    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// The content built so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Capacity of the rented buffer. Lets callers (and tests) observe reuse.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Copies the built content into a fresh, exactly-sized `String` and
    /// releases the rented buffer back to the pool.
    pub fn finish(self) -> String {
        self.buf.as_str().to_owned()
    }
}

impl Drop for PooledStringBuilder {
    fn drop(&mut self) {
        pool::release(mem::take(&mut self.buf));
    }
}

impl Default for PooledStringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for PooledStringBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}
