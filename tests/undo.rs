use stringlist::{Kind, StringList};

fn list(items: &[&str]) -> StringList {
    items.iter().copied().collect()
}

#[test]
fn fresh_list_has_nothing_to_undo() {
    let mut lst = StringList::new();
    assert!(!lst.can_undo());
    assert!(!lst.undo());
    assert!(lst.is_empty());
}

#[test]
fn insert_round_trip() {
    let mut lst = list(&["a", "b", "c"]);
    for index in 0..=3 {
        lst.insert_before(index, "x").unwrap();
        assert_eq!(lst.len(), 4);
        assert!(lst.undo());
        assert_eq!(lst, list(&["a", "b", "c"]));
    }
    lst.insert_front("f");
    lst.insert_back("b");
    assert!(lst.undo());
    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b", "c"]));
    assert!(!lst.undo());
}

#[test]
fn remove_round_trip() {
    let mut lst = list(&["a", "b", "c"]);
    lst.remove_at(1).unwrap();
    assert!(lst.undo());
    assert_eq!(lst.get(1), Ok("b"));
    assert_eq!(lst, list(&["a", "b", "c"]));

    assert!(lst.remove_first("c"));
    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b", "c"]));
}

#[test]
fn set_round_trip() {
    let mut lst = list(&["a", "b", "c"]);
    lst.set(2, "with space").unwrap();
    lst.set(2, "z").unwrap();
    assert!(lst.undo());
    assert_eq!(lst.get(2), Ok("with space"));
    assert!(lst.undo());
    assert_eq!(lst.get(2), Ok("c"));
}

#[test]
fn values_with_spaces_survive() {
    let mut lst = list(&["one two", " padded "]);
    lst.remove_at(0).unwrap();
    lst.set(0, "x").unwrap();
    assert!(lst.undo());
    assert!(lst.undo());
    assert_eq!(lst, list(&["one two", " padded "]));
}

#[test]
fn remove_all_keeps_order() {
    let mut lst = list(&["a", "b", "c"]);
    lst.remove_all();
    assert!(lst.is_empty());
    assert_eq!(lst.undo_log().len(), 3);
    assert!(lst.iter().next().is_none());
    assert!(lst.undo());
    assert_eq!(lst.to_string(), r#"{"a", "b", "c"}"#);
    assert!(!lst.undo());
}

#[test]
fn remove_all_records_clear_per_element() {
    let mut lst = list(&["a", "b", "c"]);
    lst.remove_all();
    let values: Vec<_> = lst
        .undo_log()
        .iter()
        .map(|e| {
            assert_eq!(e.kind(), Kind::Clear);
            e.get().previous().unwrap().to_owned()
        })
        .collect();
    assert_eq!(values, ["a", "b", "c"]);
}

#[test]
fn remove_all_on_empty_records_nothing() {
    let mut lst = StringList::new();
    lst.remove_all();
    assert!(!lst.can_undo());
}

#[test]
fn adjacent_clears_undo_separately() {
    let mut lst = list(&["a", "b"]);
    lst.remove_all();
    lst.assign(&list(&["x"]));
    lst.remove_all();
    assert!(lst.undo());
    assert_eq!(lst, list(&["x"]));
    assert!(lst.undo());
    assert!(lst.is_empty());
    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b"]));
}

#[test]
fn assign_then_undo() {
    let mut lst1 = list(&["a", "b", "c"]);
    let lst2 = list(&["x", "y"]);
    lst1.assign(&lst2);
    assert_eq!(lst1, lst2);
    assert!(lst1.undo());
    assert_eq!(lst1, list(&["a", "b", "c"]));
    assert_eq!(lst2, list(&["x", "y"]));
    assert!(!lst1.undo());
}

#[test]
fn assign_longer_then_undo() {
    let mut lst1 = list(&["a"]);
    let lst2 = list(&["w", "x", "y", "z"]);
    lst1.assign(&lst2);
    assert!(lst1.undo());
    assert_eq!(lst1, list(&["a"]));
}

#[test]
fn assign_shorter_then_undo() {
    let mut lst1 = list(&["a", "b", "c", "d"]);
    let lst2 = list(&["x"]);
    lst1.assign(&lst2);
    assert!(lst1.undo());
    assert_eq!(lst1, list(&["a", "b", "c", "d"]));
    assert_eq!(lst2, list(&["x"]));
}

#[test]
fn assign_into_empty_then_undo() {
    let mut lst1 = StringList::new();
    lst1.assign(&list(&["x", "y"]));
    assert!(lst1.can_undo());
    assert!(lst1.undo());
    assert!(lst1.is_empty());
    assert!(!lst1.undo());
}

#[test]
fn successive_assigns_undo_one_at_a_time() {
    let mut lst = list(&["a", "b"]);
    lst.assign(&list(&["x", "y"]));
    lst.assign(&list(&["p", "q", "r"]));
    assert!(lst.undo());
    assert_eq!(lst, list(&["x", "y"]));
    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b"]));
}

#[test]
fn assign_keeps_older_history() {
    let mut lst = list(&["a"]);
    lst.insert_back("b");
    lst.assign(&list(&["z"]));
    assert!(lst.undo());
    assert_eq!(lst, list(&["a", "b"]));
    assert!(lst.undo());
    assert_eq!(lst, list(&["a"]));
}

#[test]
fn undo_of_source_does_not_touch_destination() {
    let mut lst1 = list(&["a"]);
    let mut lst2 = list(&["x"]);
    lst2.insert_back("y");
    lst1.assign(&lst2);
    assert!(lst2.undo());
    assert_eq!(lst2, list(&["x"]));
    assert_eq!(lst1, list(&["x", "y"]));
}

#[test]
fn copy_has_no_history() {
    let mut original = list(&["a"]);
    original.insert_back("b");
    original.set(0, "z").unwrap();
    let mut copy = original.clone();
    assert!(!copy.undo());
    assert_eq!(copy, list(&["z", "b"]));
    assert!(original.undo());
    assert_eq!(original, list(&["a", "b"]));
    assert_eq!(copy, list(&["z", "b"]));
}

#[test]
fn undo_does_not_record() {
    let mut lst = list(&["a", "b"]);
    lst.set(0, "x").unwrap();
    lst.remove_at(1).unwrap();
    lst.insert_front("f");
    assert_eq!(lst.undo_log().len(), 3);
    assert!(lst.undo());
    assert_eq!(lst.undo_log().len(), 2);
    assert!(lst.undo());
    assert!(lst.undo());
    assert!(lst.undo_log().is_empty());
    assert_eq!(lst, list(&["a", "b"]));
}

#[test]
fn failed_insert_does_not_poison_undo() {
    let mut lst = list(&["a"]);
    lst.set(0, "b").unwrap();
    assert!(lst.insert_before(7, "x").is_err());
    assert!(lst.remove_at(1).is_err());
    assert!(lst.undo());
    assert_eq!(lst, list(&["a"]));
}

#[test]
fn undo_after_growth() {
    let mut lst = StringList::new();
    for i in 0..10 {
        lst.insert_back(i.to_string());
    }
    lst.insert_front("front");
    assert_eq!(lst.capacity(), 20);
    assert!(lst.undo());
    assert_eq!(lst.len(), 10);
    assert_eq!(lst.get(0), Ok("0"));
    assert_eq!(lst.capacity(), 20);
}

#[test]
fn clear_log_forgets_history() {
    let mut lst = list(&["a"]);
    lst.insert_back("b");
    lst.clear_log();
    assert!(!lst.undo());
    assert_eq!(lst, list(&["a", "b"]));
}
