use crate::{ArrayList, List, ListError, ListExt, ListFlags, ReadOnlyView};
use pretty_assertions::assert_eq;

fn assert_rejected<R: core::fmt::Debug>(result: Result<R, ListError>, expected: &str) {
    match result {
        Err(ListError::Unsupported { operation, .. }) => assert_eq!(operation, expected),
        other => panic!("expected `{expected}` to be rejected, got {other:?}"),
    }
}

#[test]
fn test_reads_pass_through() {
    let view = ArrayList::from_slice(&[3, 1, 2]).read_only();
    assert_eq!(view.len(), 3);
    assert_eq!(view.get(0).unwrap(), 3);
    assert_eq!(view.index_of(&2), Some(2));
    assert!(view.contains(&1));
    assert_eq!(view.to_vec(), vec![3, 1, 2]);
    assert_eq!(view.capacity(), 3);

    let mut target = [0; 3];
    view.copy_to(&mut target, 0).unwrap();
    assert_eq!(target, [3, 1, 2]);
}

#[test]
fn test_every_mutation_is_rejected() {
    let mut view = ArrayList::from_slice(&[3, 1, 2]).read_only();

    assert_rejected(view.add(4), "add");
    assert_rejected(view.add_range(&[4, 5]), "add_range");
    assert_rejected(view.insert(0, 4), "insert");
    assert_rejected(view.set(0, 4), "set");
    assert_rejected(view.remove_at(0), "remove_at");
    assert_rejected(view.remove(&3), "remove");
    assert_rejected(view.remove_range(0, 1), "remove_range");
    assert_rejected(view.clear(), "clear");
    assert_rejected(view.sort(), "sort");
    assert_rejected(view.sort_range(0, 2), "sort");
    assert_rejected(view.reverse(), "reverse");
    assert_rejected(view.reverse_range(0, 2), "reverse");
    assert_rejected(view.set_capacity(10), "set_capacity");
    assert_rejected(view.trim_to_size(), "trim_to_size");

    assert_eq!(view.len(), 3);
    assert_eq!(view.to_vec(), vec![3, 1, 2]);
    assert_eq!(view.version().get(), 0);
}

#[test]
fn test_rejection_ignores_argument_validity() {
    let mut view = ArrayList::<i32>::new().read_only();
    // Out-of-range arguments still report the read-only rejection.
    assert_rejected(view.remove_at(99), "remove_at");
    assert_rejected(view.insert(99, 1), "insert");
}

#[test]
fn test_sees_changes_to_borrowed_list() {
    let mut base = ArrayList::from_slice(&['a']);
    {
        let view = ReadOnlyView::new(&mut base);
        assert_eq!(view.len(), 1);
    }
    base.add('b').unwrap();

    let view = (&mut base).read_only();
    assert_eq!(view.to_vec(), vec!['a', 'b']);
    assert_eq!(view.version().get(), 1);
}

#[test]
fn test_copy_is_writable() {
    let view = ArrayList::from_slice(&[1, 2]).read_only();
    let mut copy = view.copy();
    copy.add(3).unwrap();
    assert_eq!(copy.flags(), ListFlags::empty());
    assert_eq!(view.len(), 2);
}

#[test]
fn test_flags() {
    let view = ArrayList::<u8>::new().read_only();
    assert_eq!(view.flags(), ListFlags::READ_ONLY | ListFlags::FIXED_SIZE);

    let nested = ArrayList::<u8>::new().synchronized().read_only();
    assert_eq!(
        nested.flags(),
        ListFlags::READ_ONLY | ListFlags::FIXED_SIZE | ListFlags::SYNCHRONIZED
    );
}

#[test]
fn test_get_mut_bypasses_check() {
    let mut view = ArrayList::from_slice(&[1]).read_only();
    view.get_mut().add(2).unwrap();
    assert_eq!(view.into_inner().as_slice(), &[1, 2]);
}
