//! Read-only lookup tables from scheme-specific keys to names.
//!
//! Each table has its own key type so a condensed list number can never be
//! looked up in the Portugal table by accident. Tables are built in one pass
//! with [`FromIterator`]; a key seen twice keeps the later name.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::code::Code;

/// Four-digit list number of the ICD-10 condensed list (e.g. `1002`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListNumber(String);

/// Code of the special list for Portugal (e.g. `UE02`, `CH00`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortugalCode(String);

/// Numeric WHO country code (e.g. `1010` for Algeria).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(pub i64);

macro_rules! text_key {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_key!(ListNumber);
text_key!(PortugalCode);

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<K: Ord> {
    entries: BTreeMap<K, String>,
}

impl<K: Ord> CodeTable<K> {
    pub fn get<Q>(&self, key: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(key, name)| (key, name.as_str()))
    }
}

impl<K: Ord> Default for CodeTable<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord> FromIterator<(K, String)> for CodeTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Condensed list number → cause name.
pub type CondensedTable = CodeTable<ListNumber>;
/// Three-character code → cause name, fanned out from the detailed ranges.
pub type ThreeCharTable = CodeTable<Code>;
/// Portugal special list code → cause name.
pub type PortugalTable = CodeTable<PortugalCode>;
/// Country code → country name.
pub type CountryTable = CodeTable<CountryCode>;

/// The four tables needed for one run.
#[derive(Debug, Clone, Default)]
pub struct CodeTables {
    pub condensed: CondensedTable,
    pub three_char: ThreeCharTable,
    pub portugal: PortugalTable,
    pub countries: CountryTable,
}
