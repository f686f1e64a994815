// crates/pooled_string_builder/tests/integration_pool.rs

use pooled_string_builder::PooledStringBuilder;
use std::thread;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn sequential_builders_reuse_the_grown_buffer() {
    init_logging();
    let mut first = PooledStringBuilder::with_capacity(128);
    for _ in 0..100 {
        first.push_str("0123456789");
    }
    let grown = first.capacity();
    assert!(grown >= 1000);
    assert_eq!(first.finish().len(), 1000);

    // The next rent on this thread hands the grown buffer back.
    let second = PooledStringBuilder::new();
    assert!(second.capacity() >= grown);
    assert!(second.is_empty());
}

#[test]
fn oversized_buffers_are_not_retained() {
    init_logging();
    let mut big = PooledStringBuilder::new();
    big.push_str(&"x".repeat(10_000));
    assert!(big.capacity() > 4096);
    let _ = big.finish();

    // The 10k buffer was dropped on release rather than pooled.
    let next = PooledStringBuilder::new();
    assert!(next.capacity() <= 4096);
}

#[test]
fn builders_on_different_threads_are_independent() {
    init_logging();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let mut builder = PooledStringBuilder::with_capacity(64);
                for _ in 0..=i {
                    builder.push_str("chunk;");
                }
                builder.finish()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let built = handle.join().expect("worker thread panicked");
        assert_eq!(built, "chunk;".repeat(i + 1));
    }
}

#[test]
fn buffer_is_released_even_when_the_build_panics() {
    init_logging();
    let result = std::panic::catch_unwind(|| {
        let mut builder = PooledStringBuilder::with_capacity(2048);
        builder.push_str("partial");
        panic!("interrupted mid-build");
    });
    assert!(result.is_err());

    // The panicking scope returned its buffer on unwind: renting again on
    // this thread hands the same capacity back, with no stale contents.
    let builder = PooledStringBuilder::new();
    assert!(builder.capacity() >= 2048);
    assert!(builder.is_empty());
}
