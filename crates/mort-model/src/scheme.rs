//! Coding schemes of the WHO `List` column and the sex codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// The cause-code list a mortality record is coded against.
///
/// WHO extracts are not consistent about the column type: `103` and `104`
/// show up as numbers in some files and as text in others. [`SchemeTag::from_cell`]
/// folds both spellings onto one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemeTag {
    /// ICD-10 condensed list (`101`), four-digit list numbers.
    Condensed101,
    /// ICD-10 three-character list (`103`).
    ThreeChar103,
    /// ICD-10 four-character list (`104`), truncated to three characters.
    FourChar104,
    /// ICD-10 mixed three/four-character list (`10M`), truncated to three characters.
    TenM,
    /// Special list for Portugal (`UE1`).
    PortugalUE1,
    /// Any other list. Causes under it stay unresolved.
    Unknown,
}

impl SchemeTag {
    pub fn from_cell(cell: &Cell) -> Self {
        if let Some(number) = cell.as_integer() {
            return Self::from_number(number);
        }
        match cell.as_text() {
            Some(text) => Self::parse(text),
            None => Self::Unknown,
        }
    }

    pub fn from_number(number: i64) -> Self {
        match number {
            101 => Self::Condensed101,
            103 => Self::ThreeChar103,
            104 => Self::FourChar104,
            _ => Self::Unknown,
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "101" => Self::Condensed101,
            "103" => Self::ThreeChar103,
            "104" => Self::FourChar104,
            "10M" => Self::TenM,
            "UE1" => Self::PortugalUE1,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Condensed101 => "101",
            Self::ThreeChar103 => "103",
            Self::FourChar104 => "104",
            Self::TenM => "10M",
            Self::PortugalUE1 => "UE1",
            Self::Unknown => "unknown",
        }
    }

    pub fn all() -> [Self; 6] {
        [
            Self::Condensed101,
            Self::ThreeChar103,
            Self::FourChar104,
            Self::TenM,
            Self::PortugalUE1,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for SchemeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sex of the deceased. Variants are ordered by their output letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "u")]
    Unknown,
}

impl Sex {
    /// Map a WHO sex code (`1`, `2`, `9`). Other codes have no mapping.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Male),
            2 => Some(Self::Female),
            9 => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
            Self::Unknown => "u",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
