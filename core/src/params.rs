//! Request parameters and their `key=value&key=value` serialization.
//!
//! # Design
//! `Parameters` keeps entries in insertion order so the serialized string is
//! reproducible for a given sequence of `insert` calls. Re-inserting a key
//! replaces its value but keeps the position it was first inserted at.
//!
//! Keys and values are written verbatim. No percent-encoding is applied, so a
//! value containing `&` or `=` will be split by the receiving server. The
//! GET target escapes the few characters a URI cannot carry at all (see
//! `RequestSpec::build_get`); the serialized string itself never changes.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt::{self, Display};

use indexmap::IndexMap;

/// A single parameter value.
///
/// Every multi-valued kind serializes the same way (elements joined with
/// `,`); the variants record where the value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A value with a single text form, e.g. `42`, `true`, `"abc"`.
    Scalar(String),

    /// An ordered, growable sequence (`Vec`, `VecDeque`, slices).
    Sequence(Vec<String>),

    /// A set. `HashSet` iteration order is whatever the set yields.
    Set(Vec<String>),

    /// A fixed-size array.
    Array(Vec<String>),
}

/// Writes the text that follows `key=`.
impl Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(value) => f.write_str(value),
            ParamValue::Sequence(items) | ParamValue::Set(items) | ParamValue::Array(items) => {
                f.write_str(&items.join(","))
            }
        }
    }
}

fn stringify<T: Display>(items: impl IntoIterator<Item = T>) -> Vec<String> {
    items.into_iter().map(|item| item.to_string()).collect()
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

impl<T: Display> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::Sequence(stringify(items))
    }
}

impl<T: Display> From<VecDeque<T>> for ParamValue {
    fn from(items: VecDeque<T>) -> Self {
        ParamValue::Sequence(stringify(items))
    }
}

impl<T: Display> From<&[T]> for ParamValue {
    fn from(items: &[T]) -> Self {
        ParamValue::Sequence(stringify(items))
    }
}

impl<T: Display, const N: usize> From<[T; N]> for ParamValue {
    fn from(items: [T; N]) -> Self {
        ParamValue::Array(stringify(items))
    }
}

impl<T: Display> From<BTreeSet<T>> for ParamValue {
    fn from(items: BTreeSet<T>) -> Self {
        ParamValue::Set(stringify(items))
    }
}

impl<T: Display, S> From<HashSet<T, S>> for ParamValue {
    fn from(items: HashSet<T, S>) -> Self {
        ParamValue::Set(stringify(items))
    }
}

/// Insertion-ordered parameter mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: IndexMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Serialize to `key=value&key=value`. An empty mapping gives `""`.
    pub fn serialize(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
