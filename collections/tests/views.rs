//! Views composed over each other and shared across threads.

use std::thread;

use fusee_collections::{ArrayList, List, ListError, ListExt, ListFlags};
use pretty_assertions::assert_eq;

#[test]
fn test_synchronized_over_unique() {
    let mut list = ArrayList::from_slice(&[1, 2, 3])
        .unique()
        .unwrap()
        .synchronized();

    assert!(matches!(list.add(2), Err(ListError::Unsupported { .. })));
    assert_eq!(list.add(4).unwrap(), 3);
    assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(list.flags(), ListFlags::SYNCHRONIZED | ListFlags::UNIQUE);
}

#[test]
fn test_read_only_over_synchronized_handle() {
    let mut writer = ArrayList::<i32>::new().synchronized();
    let reader = writer.share().read_only();

    writer.add_range(&[5, 6]).unwrap();
    assert_eq!(reader.to_vec(), vec![5, 6]);
    assert_eq!(reader.version(), writer.version());
}

#[test]
fn test_synchronized_behaves_like_inner() {
    let mut plain = ArrayList::from_slice(&[9, 3, 7]);
    let mut synced = plain.clone().synchronized();

    for list in [&mut plain as &mut dyn List<i32>, &mut synced] {
        list.insert(1, 4).unwrap();
        list.sort().unwrap();
        list.remove_range(0, 1).unwrap();
        list.reverse().unwrap();
    }

    assert_eq!(synced.to_vec(), plain.to_vec());
    assert_eq!(synced.version().get(), plain.version().get());
    assert_eq!(synced.capacity(), plain.capacity());
}

#[test]
fn test_boxed_views_as_trait_objects() {
    let lists: Vec<Box<dyn List<u8>>> = vec![
        Box::new(ArrayList::from_slice(&[1u8])),
        Box::new(ArrayList::from_slice(&[1u8]).read_only()),
        Box::new(ArrayList::from_slice(&[1u8]).unique().unwrap()),
    ];

    let accepted: Vec<bool> = lists
        .into_iter()
        .map(|mut list| list.add(1).is_ok())
        .collect();
    assert_eq!(accepted, vec![true, false, false]);
}

#[test]
fn test_concurrent_unique_adds() {
    let list = ArrayList::<u32>::new().unique().unwrap().synchronized();

    // Every worker tries the same values; each value lands exactly once.
    let workers: Vec<_> = (0..6)
        .map(|_| {
            let mut handle = list.share();
            thread::spawn(move || (0..200).filter(|n| handle.add(*n).is_ok()).count())
        })
        .collect();
    let accepted: usize = workers.into_iter().map(|w| w.join().unwrap()).sum();

    assert_eq!(accepted, 200);
    let mut items = list.to_vec();
    items.sort_unstable();
    assert_eq!(items, (0..200).collect::<Vec<_>>());
}

#[test]
fn test_concurrent_mixed_operations() {
    let list = ArrayList::<i64>::with_capacity(0).synchronized();

    let writers: Vec<_> = (0..4)
        .map(|worker| {
            let mut handle = list.share();
            thread::spawn(move || {
                for i in 0..500 {
                    handle.add(worker * 10_000 + i).unwrap();
                    if i % 5 == 0 {
                        handle.remove_at(0).unwrap();
                    }
                }
            })
        })
        .collect();
    let reader = {
        let handle = list.share();
        thread::spawn(move || {
            for _ in 0..200 {
                let snapshot = handle.lock();
                assert!(snapshot.capacity() >= snapshot.len());
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    // 4 workers x (500 adds - 100 removals).
    assert_eq!(list.len(), 1600);
    assert!(list.capacity() >= 1600);
}
