#![cfg(feature = "sync")]
//! Unit tests for SynchronizedView under concurrent use.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use bagwise::decorator::SynchronizedView;
use parking_lot::Mutex;
use rstest::rstest;

#[rstest]
fn test_concurrent_adds_are_all_recorded() {
    let view = SynchronizedView::wrap(Vec::<i32>::new());
    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let view = view.clone();
            thread::spawn(move || {
                for offset in 0..100 {
                    view.add(worker * 100 + offset);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(view.len::<i32>(), 800);
    let distinct: HashSet<i32> = view.snapshot().into_iter().collect();
    assert_eq!(distinct.len(), 800);
}

#[rstest]
fn test_with_lock_makes_check_then_insert_atomic() {
    let view = SynchronizedView::wrap(HashSet::<&str>::new());
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let view = view.clone();
            thread::spawn(move || {
                view.with_lock(|set| {
                    if set.is_empty() {
                        set.insert("winner");
                        true
                    } else {
                        false
                    }
                })
            })
        })
        .collect();
    let winners = workers
        .into_iter()
        .map(|worker| worker.join().unwrap())
        .filter(|&won| won)
        .count();
    assert_eq!(winners, 1);
}

#[rstest]
fn test_view_over_existing_handle() {
    let handle = Arc::new(Mutex::new(vec!['a', 'b']));
    let view = SynchronizedView::new(Arc::clone(&handle));
    assert!(view.remove(&'a'));
    assert!(!view.contains(&'a'));
    assert!(!view.is_empty::<char>());
    assert_eq!(*handle.lock(), vec!['b']);
    assert!(Arc::ptr_eq(view.handle(), &handle));
}
