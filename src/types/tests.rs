//! Unit tests for the type model.

use super::types::{is_known, CollectionKind, CollectionType, DataType};

fn list_of(element: DataType) -> DataType {
    DataType::Collection(CollectionType::of(CollectionKind::List, element).unwrap())
}

#[test]
fn test_primitive_equality() {
    assert_eq!(DataType::Int, DataType::Int);
    assert_ne!(DataType::Int, DataType::Str);
    assert_ne!(DataType::Bool, DataType::Unknown);
}

#[test]
fn test_collection_equality_is_structural() {
    assert_eq!(list_of(DataType::Int), list_of(DataType::Int));
    assert_ne!(list_of(DataType::Int), list_of(DataType::Str));

    let set = DataType::Collection(CollectionType::Set(Box::new(DataType::Int)));
    assert_ne!(list_of(DataType::Int), set);

    assert_eq!(list_of(list_of(DataType::Bool)), list_of(list_of(DataType::Bool)));
    assert_ne!(list_of(list_of(DataType::Bool)), list_of(list_of(DataType::Int)));
}

#[test]
fn test_is_known() {
    assert!(DataType::Int.is_known());
    assert!(list_of(DataType::Unknown).is_known());
    assert!(!DataType::Unknown.is_known());

    assert!(is_known(Some(&DataType::Str)));
    assert!(!is_known(Some(&DataType::Unknown)));
    assert!(!is_known(None));
}

#[test]
fn test_default_is_unknown() {
    assert_eq!(DataType::default(), DataType::Unknown);
}

#[test]
fn test_clone_same_kind_list() {
    let original = CollectionType::List(Box::new(DataType::Int));
    let cloned = original.clone_same_kind().expect("lists can be cloned");

    assert_eq!(cloned, original);
    assert_eq!(cloned.kind(), CollectionKind::List);
    assert_eq!(cloned.element_type(), &DataType::Int);
    assert!(!std::ptr::eq(cloned.element_type(), original.element_type()));
}

#[test]
fn test_clone_same_kind_set() {
    let original = CollectionType::Set(Box::new(DataType::Str));
    let cloned = original.clone_same_kind().unwrap();

    assert_eq!(cloned, original);
    assert_eq!(cloned.kind(), CollectionKind::Set);
}

#[test]
fn test_clone_same_kind_map_is_unsupported() {
    let map = CollectionType::Map(Box::new(DataType::Int));
    assert_eq!(map.kind(), CollectionKind::Map);
    assert!(map.clone_same_kind().is_none());
    assert!(CollectionType::of(CollectionKind::Map, DataType::Int).is_none());
}

#[test]
fn test_kind_agrees_with_variant() {
    for kind in [CollectionKind::List, CollectionKind::Set] {
        let collection = CollectionType::of(kind, DataType::Bool).unwrap();
        assert_eq!(collection.kind(), kind);
    }
}

#[test]
fn test_name_lookups() {
    assert_eq!(DataType::from_name("int"), Some(DataType::Int));
    assert_eq!(DataType::from_name("bool"), Some(DataType::Bool));
    assert_eq!(DataType::from_name("str"), Some(DataType::Str));
    assert_eq!(DataType::from_name("float"), None);

    assert_eq!(CollectionKind::from_name("list"), Some(CollectionKind::List));
    assert_eq!(CollectionKind::from_name("set"), Some(CollectionKind::Set));
    assert_eq!(CollectionKind::from_name("map"), Some(CollectionKind::Map));
    assert_eq!(CollectionKind::from_name("queue"), None);
}

#[test]
fn test_display() {
    assert_eq!(DataType::Int.to_string(), "int");
    assert_eq!(DataType::Unknown.to_string(), "unknown");
    assert_eq!(list_of(DataType::Str).to_string(), "list<str>");
    assert_eq!(
        DataType::Collection(CollectionType::Set(Box::new(list_of(DataType::Bool)))).to_string(),
        "set<list<bool>>"
    );
}
