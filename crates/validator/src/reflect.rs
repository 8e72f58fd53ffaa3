//! Runtime view of field values
//!
//! Rules never see concrete Rust types. Every field is lowered into a
//! [`Value`], a borrowed, category-tagged view that the engine and the
//! built-in rules can inspect uniformly. The [`Reflect`] trait performs that
//! lowering and is implemented for the standard scalar, string, pointer-like
//! and collection types; `#[derive(Record)]` implements it for user records.
//!
//! ## Pointer and nil semantics
//!
//! - `Option<T>` is a reference: `None` is an absent reference.
//! - `Option<Vec<T>>` and `Option<HashMap<K, V>>` are nilable collections:
//!   `None` reflects as an absent slice or map rather than an absent reference.
//! - `Box<T>` and `&T` are transparent.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;

use crate::record::Record;

// ============================================================================
// KIND
// ============================================================================

/// Value category used for rule dispatch and recursion decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `bool`.
    Bool,
    /// Signed integers of any width.
    Int,
    /// Unsigned integers of any width.
    Uint,
    /// `f32` / `f64`.
    Float,
    /// `String` / `str`.
    Str,
    /// A reference that may be absent (`Option<T>`).
    Ref,
    /// A growable sequence that may be absent.
    Slice,
    /// A fixed-size array.
    Array,
    /// A key/value map that may be absent.
    Map,
    /// A nested record (`#[derive(Record)]`).
    Record,
    /// A type the reflection layer does not look into.
    Opaque,
}

impl Kind {
    /// Short lowercase name used in diagnostics and string representations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Str => "string",
            Self::Ref => "ptr",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Map => "map",
            Self::Record => "struct",
            Self::Opaque => "opaque",
        }
    }

    /// Returns `true` for the categories that can be absent as a whole
    /// (slices and maps).
    pub const fn is_nilable_collection(self) -> bool {
        matches!(self, Self::Slice | Self::Map)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A borrowed view of one field value.
#[derive(Clone)]
pub enum Value<'a> {
    /// A boolean.
    Bool(bool),
    /// Any signed integer, widened to 64 bits.
    Int(i64),
    /// Any unsigned integer, widened to 64 bits.
    Uint(u64),
    /// Any float, widened to 64 bits.
    Float(f64),
    /// A string slice.
    Str(&'a str),
    /// A reference; `None` means absent.
    Ref(Option<Box<Value<'a>>>),
    /// A sequence; `None` means an absent (nil) sequence.
    Slice(Option<Vec<Value<'a>>>),
    /// A fixed-size array.
    Array(Vec<Value<'a>>),
    /// A map as key/value pairs; `None` means an absent (nil) map.
    Map(Option<Vec<(Value<'a>, Value<'a>)>>),
    /// A nested record.
    Record(&'a dyn Record),
    /// A value the reflection layer does not look into, tagged with its type name.
    Opaque(&'static str),
}

impl<'a> Value<'a> {
    /// Returns the category of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Ref(_) => Kind::Ref,
            Self::Slice(_) => Kind::Slice,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Record(_) => Kind::Record,
            Self::Opaque(_) => Kind::Opaque,
        }
    }

    /// Returns `true` for an absent reference, slice or map.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Ref(None) | Self::Slice(None) | Self::Map(None))
    }

    /// Resolves this value to a record, dereferencing exactly one level of
    /// reference.
    ///
    /// Returns `None` for absent references and for anything that is not a
    /// record after that single dereference.
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Self::Record(record) => Some(*record),
            Self::Ref(Some(inner)) => match inner.as_ref() {
                Self::Record(record) => Some(*record),
                _ => None,
            },
            _ => None,
        }
    }

    /// Number of elements of a present slice, array or map.
    pub fn element_count(&self) -> Option<usize> {
        match self {
            Self::Slice(Some(items)) | Self::Array(items) => Some(items.len()),
            Self::Map(Some(entries)) => Some(entries.len()),
            _ => None,
        }
    }

    /// String representation of the value.
    ///
    /// Strings are returned as-is and scalars in their decimal form.
    /// Composite values collapse to a placeholder of the form
    /// `<slice Value>`, so their length says nothing about their contents.
    pub fn repr(&self) -> Cow<'a, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(*s),
            Self::Bool(b) => Cow::Owned(b.to_string()),
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Uint(n) => Cow::Owned(n.to_string()),
            Self::Float(n) => Cow::Owned(n.to_string()),
            other => Cow::Owned(format!("<{} Value>", other.kind())),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Ref(inner) => f.debug_tuple("Ref").field(inner).finish(),
            Self::Slice(items) => f.debug_tuple("Slice").field(items).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Record(record) => f.debug_tuple("Record").field(&record.type_name()).finish(),
            Self::Opaque(name) => f.debug_tuple("Opaque").field(name).finish(),
        }
    }
}

// ============================================================================
// REFLECT
// ============================================================================

/// Lowers a Rust value into a [`Value`] view.
///
/// `KIND` and `NESTED` are known without a value at hand, which is what lets
/// `Option<Vec<T>>` reflect `None` as an absent slice and lets the derive
/// macro mark recursion candidates in its static field table.
pub trait Reflect {
    /// Category of every value of this type.
    const KIND: Kind;

    /// Whether a field of this type is a record or a reference to one.
    const NESTED: bool = matches!(Self::KIND, Kind::Record);

    /// Returns the borrowed view of `self`.
    fn reflect(&self) -> Value<'_>;
}

macro_rules! reflect_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                const KIND: Kind = Kind::Int;

                fn reflect(&self) -> Value<'_> {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! reflect_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                const KIND: Kind = Kind::Uint;

                fn reflect(&self) -> Value<'_> {
                    Value::Uint(u64::from(*self))
                }
            }
        )*
    };
}

reflect_signed!(i8, i16, i32, i64);
reflect_unsigned!(u8, u16, u32, u64);

impl Reflect for isize {
    const KIND: Kind = Kind::Int;

    fn reflect(&self) -> Value<'_> {
        Value::Int(*self as i64)
    }
}

impl Reflect for usize {
    const KIND: Kind = Kind::Uint;

    fn reflect(&self) -> Value<'_> {
        Value::Uint(*self as u64)
    }
}

impl Reflect for f32 {
    const KIND: Kind = Kind::Float;

    fn reflect(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl Reflect for f64 {
    const KIND: Kind = Kind::Float;

    fn reflect(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl Reflect for bool {
    const KIND: Kind = Kind::Bool;

    fn reflect(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Reflect for str {
    const KIND: Kind = Kind::Str;

    fn reflect(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl Reflect for String {
    const KIND: Kind = Kind::Str;

    fn reflect(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    const KIND: Kind = T::KIND;
    const NESTED: bool = T::NESTED;

    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    const KIND: Kind = T::KIND;
    const NESTED: bool = T::NESTED;

    fn reflect(&self) -> Value<'_> {
        (**self).reflect()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    const KIND: Kind = if T::KIND.is_nilable_collection() {
        T::KIND
    } else {
        Kind::Ref
    };
    const NESTED: bool = matches!(T::KIND, Kind::Record);

    fn reflect(&self) -> Value<'_> {
        match self {
            Some(inner) if T::KIND.is_nilable_collection() => inner.reflect(),
            Some(inner) => Value::Ref(Some(Box::new(inner.reflect()))),
            None => match T::KIND {
                Kind::Slice => Value::Slice(None),
                Kind::Map => Value::Map(None),
                _ => Value::Ref(None),
            },
        }
    }
}

impl<T: Reflect> Reflect for [T] {
    const KIND: Kind = Kind::Slice;

    fn reflect(&self) -> Value<'_> {
        Value::Slice(Some(self.iter().map(Reflect::reflect).collect()))
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    const KIND: Kind = Kind::Slice;

    fn reflect(&self) -> Value<'_> {
        self.as_slice().reflect()
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    const KIND: Kind = Kind::Slice;

    fn reflect(&self) -> Value<'_> {
        Value::Slice(Some(self.iter().map(Reflect::reflect).collect()))
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    const KIND: Kind = Kind::Array;

    fn reflect(&self) -> Value<'_> {
        Value::Array(self.iter().map(Reflect::reflect).collect())
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    const KIND: Kind = Kind::Map;

    fn reflect(&self) -> Value<'_> {
        Value::Map(Some(
            self.iter()
                .map(|(key, value)| (key.reflect(), value.reflect()))
                .collect(),
        ))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;

    fn reflect(&self) -> Value<'_> {
        Value::Map(Some(
            self.iter()
                .map(|(key, value)| (key.reflect(), value.reflect()))
                .collect(),
        ))
    }
}

impl<'r> Reflect for dyn Record + 'r {
    const KIND: Kind = Kind::Record;

    fn reflect(&self) -> Value<'_> {
        Value::Record(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
