//! Loosely typed cell values as produced by table loaders.
//!
//! Source tables do not agree on column types: the WHO extracts encode the
//! `List` column as numbers in some files and as text in others, and a loader
//! may widen integer columns to floats when blanks are present. A [`Cell`]
//! keeps that ambiguity explicit until a typed consumer decides what it needs.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Build a cell from raw text, treating blank text as null.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::Null
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Integer view of the cell. Integral floats count; text does not.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 && value.is_finite() => {
                Some(*value as i64)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_null() {
        assert!(Cell::from_text("   ").is_null());
        assert_eq!(Cell::from_text(" A01 "), Cell::Text("A01".to_string()));
    }

    #[test]
    fn integral_floats_read_as_integers() {
        assert_eq!(Cell::Float(103.0).as_integer(), Some(103));
        assert_eq!(Cell::Float(103.5).as_integer(), None);
        assert_eq!(Cell::from("103").as_integer(), None);
    }
}
