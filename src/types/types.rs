use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref PRIMITIVE_LOOKUP: HashMap<&'static str, DataType> = {
        let mut map = HashMap::new();
        map.insert("bool", DataType::Bool);
        map.insert("int", DataType::Int);
        map.insert("str", DataType::Str);
        map
    };
    pub static ref COLLECTION_LOOKUP: HashMap<&'static str, CollectionKind> = {
        let mut map = HashMap::new();
        map.insert("list", CollectionKind::List);
        map.insert("set", CollectionKind::Set);
        map.insert("map", CollectionKind::Map);
        map
    };
}

/// Data type of an expression, parameter, return value or symbol.
///
/// `Unknown` is the "not resolved yet" marker. It is a value like any
/// other, so a tree can be handed on with some types still open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    Bool,
    Int,
    Str,
    #[default]
    Unknown,
    Collection(CollectionType),
}

impl DataType {
    /// Looks up a primitive type by its source name (`int`, `bool`, `str`).
    pub fn from_name(name: &str) -> Option<DataType> {
        PRIMITIVE_LOOKUP.get(name).cloned()
    }

    pub fn is_known(&self) -> bool {
        *self != DataType::Unknown
    }
}

/// `true` when a type is present and not `Unknown`.
pub fn is_known(data_type: Option<&DataType>) -> bool {
    data_type.is_some_and(DataType::is_known)
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Bool => write!(f, "bool"),
            DataType::Int => write!(f, "int"),
            DataType::Str => write!(f, "str"),
            DataType::Unknown => write!(f, "unknown"),
            DataType::Collection(collection) => write!(f, "{}", collection),
        }
    }
}

/// Family tag of a collection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    List,
    Set,
    Map,
}

impl CollectionKind {
    pub fn from_name(name: &str) -> Option<CollectionKind> {
        COLLECTION_LOOKUP.get(name).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            CollectionKind::List => "list",
            CollectionKind::Set => "set",
            CollectionKind::Map => "map",
        }
    }
}

/// A generic collection over exactly one element type.
///
/// `Map` is reserved: values of it can exist, but it cannot be built
/// through [`CollectionType::of`] or cloned with
/// [`CollectionType::clone_same_kind`] yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CollectionType {
    List(Box<DataType>),
    Set(Box<DataType>),
    Map(Box<DataType>),
}

impl CollectionType {
    /// Builds a collection of the given family, or `None` for a family
    /// that is not supported.
    pub fn of(kind: CollectionKind, element_type: DataType) -> Option<CollectionType> {
        match kind {
            CollectionKind::List => Some(CollectionType::List(Box::new(element_type))),
            CollectionKind::Set => Some(CollectionType::Set(Box::new(element_type))),
            CollectionKind::Map => None,
        }
    }

    pub fn kind(&self) -> CollectionKind {
        match self {
            CollectionType::List(_) => CollectionKind::List,
            CollectionType::Set(_) => CollectionKind::Set,
            CollectionType::Map(_) => CollectionKind::Map,
        }
    }

    pub fn element_type(&self) -> &DataType {
        match self {
            CollectionType::List(element)
            | CollectionType::Set(element)
            | CollectionType::Map(element) => element,
        }
    }

    /// Fresh collection of the same family sharing this element type.
    pub fn clone_same_kind(&self) -> Option<CollectionType> {
        CollectionType::of(self.kind(), self.element_type().clone())
    }
}

impl Display for CollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<{}>", self.kind().name(), self.element_type())
    }
}
