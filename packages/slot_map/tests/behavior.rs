//! Behavior of the public `SlotMap` API as seen by a consumer of the crate.

use std::collections::HashSet;

use slot_map::{Error, SlotHandle, SlotMap, ValidationMode};

fn checked_map<T>() -> SlotMap<T> {
    SlotMap::builder().validation(ValidationMode::Full).build()
}

#[test]
fn value_survives_unrelated_mutations() {
    let mut map = checked_map();

    let kept = map.insert(String::from("kept"));

    let others = (0..50).map(|i| map.insert(i.to_string())).collect::<Vec<_>>();

    for handle in others.iter().step_by(2) {
        map.remove(*handle);
    }

    for i in 0..10 {
        _ = map.insert(format!("late {i}"));
    }

    assert_eq!(map[kept], "kept");
    assert_eq!(map.len(), 1 + 25 + 10);
}

#[test]
fn swap_remove_scenario() {
    let mut map = checked_map();

    let a = map.insert('A');
    let b = map.insert('B');
    let c = map.insert('C');

    map.remove(a);

    assert_eq!(map.len(), 2);
    assert_eq!(map[b], 'B');
    assert_eq!(map[c], 'C');
    assert!(map.get(a).is_none());

    let d = map.insert('D');

    assert_eq!(d, a);
    assert_eq!(map[a], 'D');
}

#[test]
fn clear_behaves_like_new_map() {
    let mut map = checked_map();

    for i in 0..20 {
        _ = map.insert(i);
    }

    map.clear();

    assert_eq!(map.len(), 0);
    assert_eq!(map.iter().next(), None);

    let mut fresh = SlotMap::new();

    let handles = (0..5).map(|i| map.insert(i)).collect::<Vec<_>>();
    let fresh_handles = (0..5).map(|i| fresh.insert(i)).collect::<Vec<_>>();

    assert_eq!(handles, fresh_handles);
}

#[test]
fn handles_of_live_values_are_distinct() {
    let mut map = checked_map();

    let mut handles = (0..100).map(|i| map.insert(i)).collect::<Vec<_>>();

    for handle in handles.drain(..40) {
        map.remove(handle);
    }

    handles.extend((0..60).map(|i| map.insert(i)));

    let unique = handles.iter().copied().collect::<HashSet<_>>();
    assert_eq!(unique.len(), handles.len());
    assert_eq!(unique, map.handles().collect::<HashSet<_>>());
}

#[test]
fn stale_handles_are_reported() {
    let mut map = SlotMap::new();

    let a = map.insert(1_u8);
    _ = map.insert(2_u8);
    map.remove(a);

    let error = map.try_remove(a).unwrap_err();
    assert!(matches!(error, Error::HandleNotInUse { .. }));
    assert_eq!(error.to_string(), format!("handle {a:?} is not in use"));
}

#[test]
fn handles_from_another_map_out_of_range() {
    let mut big = SlotMap::new();
    let handles = (0..10).map(|i| big.insert(i)).collect::<Vec<_>>();

    let mut small = SlotMap::<i32>::new();
    _ = small.insert(0);

    let foreign: SlotHandle = *handles.last().unwrap();

    assert!(!small.contains(foreign));
    assert!(small.find(foreign).is_end());
    assert!(matches!(
        small.try_remove(foreign),
        Err(Error::HandleOutOfRange { .. })
    ));
}

#[test]
fn find_and_handle_are_inverse() {
    let mut map = checked_map();

    let handles = (0..10).map(|i| map.insert(i * 10)).collect::<Vec<_>>();
    map.remove(handles[3]);
    map.remove(handles[7]);

    for (i, handle) in handles.iter().enumerate() {
        let cursor = map.find(*handle);

        if i == 3 || i == 7 {
            assert!(cursor.is_end());
        } else {
            assert_eq!(cursor.handle(), Some(*handle));
            assert_eq!(cursor.get(), Some(&(i * 10)));
        }
    }
}

#[test]
fn find_mut_allows_in_place_update() {
    let mut map = checked_map();

    let a = map.insert(vec![1, 2]);

    if let Some(value) = map.find_mut(a).get_mut() {
        value.push(3);
    }

    assert_eq!(map[a], vec![1, 2, 3]);
}

#[test]
fn values_are_dropped_with_map() {
    use std::rc::Rc;

    let shared = Rc::new(());

    {
        let mut map = SlotMap::new();
        for _ in 0..5 {
            _ = map.insert(Rc::clone(&shared));
        }

        assert_eq!(Rc::strong_count(&shared), 6);
    }

    assert_eq!(Rc::strong_count(&shared), 1);
}
