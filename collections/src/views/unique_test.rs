use crate::{ArrayList, List, ListError, ListExt, ListFlags, UniqueView};
use pretty_assertions::assert_eq;

fn is_duplicate<R>(result: Result<R, ListError>) -> bool {
    matches!(
        result,
        Err(ListError::Unsupported {
            reason: "unique lists cannot contain duplicate elements",
            ..
        })
    )
}

#[test]
fn test_add() {
    let mut view = ArrayList::from_slice(&[1, 2, 3]).unique().unwrap();
    assert!(is_duplicate(view.add(2)));
    assert_eq!(view.len(), 3);

    assert_eq!(view.add(4).unwrap(), 3);
    assert_eq!(view.len(), 4);
}

#[test]
fn test_new_rejects_existing_duplicates() {
    let result = UniqueView::new(ArrayList::from_slice(&[1, 2, 1]));
    assert!(matches!(
        result,
        Err(ListError::InvalidArgument { name: "list", .. })
    ));
    assert!(ArrayList::from_slice(&["a", "a"]).unique().is_err());
    assert!(ArrayList::<u8>::new().unique().is_ok());
}

#[test]
fn test_insert() {
    let mut view = ArrayList::from_slice(&['b', 'c']).unique().unwrap();
    assert!(is_duplicate(view.insert(0, 'c')));
    view.insert(0, 'a').unwrap();
    assert_eq!(view.to_vec(), vec!['a', 'b', 'c']);
}

#[test]
fn test_set() {
    let mut view = ArrayList::from_slice(&[1, 2, 3]).unique().unwrap();

    // Writing an element back to its own slot is fine.
    view.set(1, 2).unwrap();
    assert_eq!(view.version().get(), 1);

    assert!(is_duplicate(view.set(0, 3)));
    view.set(0, 7).unwrap();
    assert_eq!(view.to_vec(), vec![7, 2, 3]);

    assert!(matches!(
        view.set(5, 9),
        Err(ListError::IndexOutOfRange { index: 5, len: 3 })
    ));
}

#[test]
fn test_add_range() {
    let mut view = ArrayList::from_slice(&[1, 2]).unique().unwrap();

    assert!(is_duplicate(view.add_range(&[3, 2])));
    assert!(is_duplicate(view.add_range(&[5, 6, 5])));
    assert_eq!(view.to_vec(), vec![1, 2]);
    assert_eq!(view.version().get(), 0);

    view.add_range(&[3, 4]).unwrap();
    assert_eq!(view.to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_other_mutations_pass_through() {
    let mut view = ArrayList::from_slice(&[4, 1, 3, 2]).unique().unwrap();
    view.sort().unwrap();
    assert_eq!(view.to_vec(), vec![1, 2, 3, 4]);
    view.reverse().unwrap();
    assert!(view.remove(&4).unwrap());
    assert_eq!(view.remove_at(0).unwrap(), 3);
    view.clear().unwrap();
    assert!(view.is_empty());

    // Removal frees the value for reuse.
    view.add(4).unwrap();
    assert_eq!(view.to_vec(), vec![4]);
}

#[test]
fn test_get_mut_is_unchecked() {
    let mut view = ArrayList::from_slice(&[1]).unique().unwrap();
    view.get_mut().add(1).unwrap();
    assert_eq!(view.len(), 2);

    let inner = view.into_inner();
    assert_eq!(inner.as_slice(), &[1, 1]);
}

#[test]
fn test_over_borrowed_list() {
    let mut base = ArrayList::from_slice(&[1, 2]);
    {
        let mut view = (&mut base).unique().unwrap();
        view.add(3).unwrap();
        assert!(is_duplicate(view.add(1)));
    }
    assert_eq!(base.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_flags() {
    let view = ArrayList::<i64>::new().unique().unwrap();
    assert_eq!(view.flags(), ListFlags::UNIQUE);
    assert_eq!(
        view.read_only().flags(),
        ListFlags::UNIQUE | ListFlags::READ_ONLY | ListFlags::FIXED_SIZE
    );
}
