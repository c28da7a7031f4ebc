/// Container tests: ordered vectors, first-match keyed lookup, append-only
/// insertion and owning vs view construction.
use any_core::{Any, AnyError, Ecma, Map, Ownership, Vector};

// ============================================================================
// 1. Vector
// ============================================================================

#[test]
fn vector_preserves_construction_order() {
    let list = Vector::from_values(vec![Any::int(3), Any::string("b"), Any::null()]);
    let types: Vec<&str> = list.iter().map(Any::type_str).collect();
    assert_eq!(types, vec!["kInt", "kString", "kNull"]);
    assert_eq!(list.get(0), Some(&Any::int(3)));
    assert_eq!(list.get(2), Some(&Any::null()));
}

#[test]
fn vector_out_of_range_is_absent() {
    let empty = Vector::new();
    assert!(empty.is_empty());
    assert!(empty.get(0).is_none());

    let list: Vector<'_> = vec![Any::int(1)].into_iter().collect();
    assert!(list.get(1).is_none());
    assert!(list.get(usize::MAX).is_none());
}

#[test]
fn vector_push_appends_at_end() {
    let mut list = Vector::new();
    for i in 0..5 {
        list.push(Any::int(i)).unwrap();
    }
    let ints: Vec<i64> = list.iter().filter_map(Any::as_int).collect();
    assert_eq!(ints, vec![0, 1, 2, 3, 4]);
    assert_eq!(list.to_vec().len(), 5);
}

#[test]
fn vector_debug_is_a_list() {
    let list = Vector::from_values(vec![Any::int(1), Any::null()]);
    assert_eq!(format!("{list:?}"), "[Int(1), Null]");
}

// ============================================================================
// 2. Map / Ecma lookup
// ============================================================================

#[test]
fn map_lookup_returns_first_inserted_duplicate() {
    let mut map = Map::new();
    map.insert("id", Any::int(1)).unwrap();
    map.insert("id", Any::int(2)).unwrap();
    map.insert("id", Any::int(3)).unwrap();

    assert_eq!(map.len(), 3, "duplicates are stored, not merged");
    assert_eq!(map.get("id"), Some(&Any::int(1)));
    let all: Vec<i64> = map.get_all("id").filter_map(Any::as_int).collect();
    assert_eq!(all, vec![1, 2, 3]);
}

#[test]
fn ecma_lookup_matches_map_lookup() {
    let pairs = [
        ("x", Any::int(1)),
        ("y", Any::string("why")),
        ("x", Any::int(2)),
    ];
    let map = Map::from_pairs(pairs.clone());
    let ecma = Ecma::from_pairs(pairs);

    for key in ["x", "y", "z"] {
        assert_eq!(map.get(key), ecma.get(key), "lookup of {key:?}");
    }
    assert_eq!(ecma.get("x"), Some(&Any::int(1)));
    assert!(ecma.get("z").is_none());
}

#[test]
fn keyed_lookup_is_exact_and_case_sensitive() {
    let map = Map::from_pairs([("Key", Any::int(1)), ("key ", Any::int(2))]);
    assert!(map.get("key").is_none());
    assert!(map.contains_key("Key"));
    assert!(!map.contains_key("KEY"));
    assert_eq!(map.get("key "), Some(&Any::int(2)));
}

#[test]
fn keyed_iteration_follows_insertion_order() {
    let mut ecma = Ecma::new();
    for (i, key) in ["3", "1", "2", "1"].iter().enumerate() {
        ecma.insert(*key, Any::int(i as i64)).unwrap();
    }
    let keys: Vec<&str> = ecma.keys().collect();
    assert_eq!(keys, vec!["3", "1", "2", "1"]);
    let values: Vec<i64> = ecma.values().filter_map(Any::as_int).collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
    let snapshot = ecma.to_vec();
    assert_eq!(snapshot[3], ("1", &Any::int(3)));
}

#[test]
fn insert_never_rewrites_existing_entries() {
    let mut map = Map::from_pairs([("a", Any::string("first"))]);
    map.insert("a", Any::string("second")).unwrap();
    assert_eq!(map.get("a").and_then(Any::as_str), Some("first"));
    assert_eq!(map.iter().nth(1).map(|(k, _)| k), Some("a"));
}

#[test]
fn empty_keyed_containers() {
    let map = Map::default();
    assert!(map.is_empty());
    assert!(map.get("").is_none());
    assert!(map.owns_children());

    let view = Ecma::view();
    assert!(view.is_empty());
    assert_eq!(view.ownership(), Ownership::View);
}

// ============================================================================
// 3. Views
// ============================================================================

#[test]
fn vector_view_references_external_values() {
    let a = Any::int(1);
    let b = Any::map([("inner", Any::double(0.5))]);
    let view = Any::vector_view(vec![&a, &b]);

    let list = view.as_vector().unwrap();
    assert_eq!(list.ownership(), Ownership::View);
    assert!(std::ptr::eq(list.get(0).unwrap(), &a));
    assert!(std::ptr::eq(list.get(1).unwrap(), &b));
    assert_eq!(view.pointer("/1/inner"), Some(&Any::double(0.5)));
}

#[test]
fn keyed_views_share_lookup_semantics() {
    let one = Any::int(1);
    let two = Any::int(2);
    let map = Any::map_view([("k", &one), ("k", &two)]);
    let ecma = Any::ecma_view([("k", &two)]);

    assert!(std::ptr::eq(map.get("k").unwrap(), &one));
    assert_eq!(ecma.get("k"), Some(&two));
    assert!(!map.as_map().unwrap().owns_children());
}

#[test]
fn view_can_be_filled_incrementally() {
    let values = [Any::int(10), Any::int(20)];
    let mut view = Map::view();
    view.insert("ten", &values[0]).unwrap();
    view.insert("twenty", &values[1]).unwrap();
    assert_eq!(view.get("twenty"), Some(&Any::int(20)));

    let mut list = Vector::view();
    for v in &values {
        list.push(v).unwrap();
    }
    assert_eq!(list.len(), 2);
}

#[test]
fn mismatched_append_is_rejected_without_side_effects() {
    let external = Any::int(1);

    let mut owning = Map::new();
    let err = owning.insert("k", &external).unwrap_err();
    assert!(matches!(
        err,
        AnyError::OwnershipMismatch {
            container: Ownership::Owning,
            child: Ownership::View
        }
    ));
    assert!(owning.is_empty());
    assert_eq!(
        err.to_string(),
        "Ownership mismatch: owning container rejects view child"
    );

    let mut view = Vector::view();
    assert!(view.push(Any::int(2)).is_err());
    assert!(view.is_empty());
}

#[test]
fn equality_is_structural_across_ownership_modes() {
    let x = Any::string("x");
    let owned = Any::ecma([("k", Any::string("x"))]);
    let view = Any::ecma_view([("k", &x)]);
    assert_eq!(owned, view);
}
