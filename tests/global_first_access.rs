//! Races the very first `get_container()` call of the process.
//!
//! Kept in its own test binary so nothing touches the global slot before the
//! threads are released.

use service_locator::get_container;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_first_access_sees_one_default() {
    let thread_count = 16;
    let barrier = Arc::new(Barrier::new(thread_count));

    let handles: Vec<_> = (0..thread_count)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                get_container()
            })
        })
        .collect();

    let containers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(containers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert!(Arc::ptr_eq(&containers[0], &get_container()));
}
