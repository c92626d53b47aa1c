use std::thread;

use crate::{ArrayList, List, ListExt, ListFlags, SynchronizedView};
use pretty_assertions::assert_eq;

#[test]
fn test_forwards_operations() {
    let mut list = ArrayList::from_slice(&[3, 1, 2]).synchronized();
    list.add(0).unwrap();
    list.sort().unwrap();
    assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(list.binary_search(&2), Ok(2));
    assert_eq!(list.remove_at(0).unwrap(), 0);
    assert_eq!(list.len(), 3);
    assert_eq!(list.version().get(), 3);
}

#[test]
fn test_shared_handles_see_each_other() {
    let mut first = ArrayList::<i32>::new().synchronized();
    let mut second = first.share();
    assert!(first.shares_lock_with(&second));

    first.add(1).unwrap();
    second.add(2).unwrap();
    assert_eq!(first.to_vec(), vec![1, 2]);
    assert_eq!(second.version(), first.version());
}

#[test]
fn test_synchronized_again_does_not_nest() {
    let list = ArrayList::<u8>::new().synchronized();
    let handle = list.share();
    let again = list.synchronized();
    assert!(again.shares_lock_with(&handle));
}

#[test]
fn test_generic_synchronized_nests_a_lock() {
    fn wrap<L: ListExt<i32>>(list: L) -> SynchronizedView<L> {
        list.synchronized()
    }

    let inner = ArrayList::from_slice(&[1]).synchronized();
    let mut inner_handle = inner.share();
    let mut outer = wrap(inner);

    // Both locks guard the same elements and stay consistent.
    inner_handle.add(2).unwrap();
    outer.add(3).unwrap();
    assert_eq!(outer.to_vec(), vec![1, 2, 3]);
    assert_eq!(inner_handle.version(), outer.version());
    assert_eq!(outer.flags(), ListFlags::SYNCHRONIZED);
}

#[test]
fn test_view_over_synchronized_list_nests_a_lock() {
    let inner = ArrayList::<u32>::new().synchronized();
    let outer = inner.share().read_only().synchronized();

    let writers: Vec<_> = (0..4)
        .map(|n| {
            let mut handle = inner.share();
            thread::spawn(move || {
                for i in 0..100 {
                    handle.add(n * 100 + i).unwrap();
                }
            })
        })
        .collect();
    let reader = {
        let outer = outer.share();
        thread::spawn(move || {
            for _ in 0..100 {
                assert!(outer.len() <= 400);
            }
        })
    };
    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    assert_eq!(outer.len(), 400);
    assert!(
        outer
            .flags()
            .contains(ListFlags::SYNCHRONIZED | ListFlags::READ_ONLY)
    );
}

#[test]
fn test_clone_uses_fresh_lock() {
    let mut list = ArrayList::from_slice(&[1]).synchronized();
    let cloned = list.clone();
    assert!(!cloned.shares_lock_with(&list));

    list.add(2).unwrap();
    assert_eq!(cloned.to_vec(), vec![1]);
}

#[test]
fn test_lock_for_compound_sequence() {
    let list = ArrayList::from_slice(&[1, 2]).synchronized();
    {
        let mut guard = list.lock();
        if !guard.contains(&3) {
            guard.add(3).unwrap();
        }
    }
    assert_eq!(list.len(), 3);
}

#[test]
fn test_into_inner() {
    let list = ArrayList::from_slice(&['x']).synchronized();
    let handle = list.share();

    let list = match list.into_inner() {
        Ok(_) => panic!("another handle is still alive"),
        Err(list) => list,
    };
    drop(handle);

    let inner = list.into_inner().unwrap_or_else(|_| panic!("last handle"));
    assert_eq!(inner.as_slice(), &['x']);
}

#[test]
fn test_concurrent_adds() {
    let list = ArrayList::<usize>::with_capacity(0).synchronized();
    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let mut handle = list.share();
            thread::spawn(move || {
                for i in 0..250 {
                    handle.add(worker * 1000 + i).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(list.len(), 2000);
    assert_eq!(list.version().get(), 2000);
    let mut items = list.to_vec();
    items.sort_unstable();
    items.dedup();
    assert_eq!(items.len(), 2000);
}

#[test]
fn test_flags() {
    let view: SynchronizedView<ArrayList<i32>> = SynchronizedView::new(ArrayList::new());
    assert_eq!(view.flags(), ListFlags::SYNCHRONIZED);

    let nested = ArrayList::<i32>::new().unique().unwrap().synchronized();
    assert_eq!(nested.flags(), ListFlags::SYNCHRONIZED | ListFlags::UNIQUE);
}
