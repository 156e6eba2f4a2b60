//! ICD-10 three-character codes and the range notation used by the WHO
//! cause-code tables.
//!
//! The WHO tables describe which detailed codes roll up into a cause with a
//! compact notation: `A98-B03, B06-B07`. Expanding it walks the numeral from
//! `00` to `99` and carries into the next letter on rollover, so `A98-B03`
//! expands to `A98, A99, B00, B01, B02, B03`.
//!
//! Both grammars are fully anchored. Trailing characters are rejected.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cell::Cell;
use crate::error::{CodeError, Result};

static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z])([0-9]{2})$").expect("Invalid code regex"));

static RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][0-9]{2})-([A-Z][0-9]{2})$").expect("Invalid code range regex")
});

/// A three-character ICD-10 code such as `A01`.
///
/// Ordering compares the letter first, then the numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    letter: u8,
    number: u8,
}

impl Code {
    pub const MIN: Self = Self {
        letter: b'A',
        number: 0,
    };
    pub const MAX: Self = Self {
        letter: b'Z',
        number: 99,
    };

    /// Build a code from its parts, or `None` if either part is out of range.
    pub fn new(letter: char, number: u8) -> Option<Self> {
        if letter.is_ascii_uppercase() && number <= 99 {
            Some(Self {
                letter: letter as u8,
                number,
            })
        } else {
            None
        }
    }

    pub fn letter(self) -> char {
        char::from(self.letter)
    }

    pub fn number(self) -> u8 {
        self.number
    }

    /// Letter and zero-padded numeral, e.g. `('A', "01")`.
    pub fn split(self) -> (char, String) {
        (self.letter(), format!("{:02}", self.number))
    }

    /// Position of this code in the `A00..=Z99` sequence.
    pub fn ordinal(self) -> u32 {
        u32::from(self.letter - b'A') * 100 + u32::from(self.number)
    }

    /// The next code, carrying `99` into the next letter. `None` after `Z99`.
    pub fn successor(self) -> Option<Self> {
        if self.number < 99 {
            return Some(Self {
                letter: self.letter,
                number: self.number + 1,
            });
        }
        if self.letter < b'Z' {
            return Some(Self {
                letter: self.letter + 1,
                number: 0,
            });
        }
        None
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = CODE_REGEX.captures(s).ok_or_else(|| CodeError::format(s))?;
        let letter = caps[1].as_bytes()[0];
        let number = caps[2].parse::<u8>().map_err(|_| CodeError::format(s))?;
        Ok(Self { letter, number })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.letter(), self.number)
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An inclusive, non-empty run of codes. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    start: Code,
    end: Code,
}

impl CodeRange {
    pub fn new(start: Code, end: Code) -> Result<Self> {
        if end < start {
            return Err(CodeError::RangeOrder {
                input: format!("{start}-{end}"),
            });
        }
        Ok(Self { start, end })
    }

    pub fn single(code: Code) -> Self {
        Self {
            start: code,
            end: code,
        }
    }

    pub fn start(&self) -> Code {
        self.start
    }

    pub fn end(&self) -> Code {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end.ordinal() - self.start.ordinal()) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, code: Code) -> bool {
        self.start <= code && code <= self.end
    }

    /// Codes from `start` to `end` inclusive, in order.
    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        let end = self.end;
        std::iter::successors(Some(self.start), |code| code.successor())
            .take_while(move |code| *code <= end)
    }
}

impl FromStr for CodeRange {
    type Err = CodeError;

    /// Parse either a single code (`A01`) or a range (`A98-B03`).
    fn from_str(s: &str) -> Result<Self> {
        if CODE_REGEX.is_match(s) {
            return s.parse().map(Self::single);
        }
        let caps = RANGE_REGEX
            .captures(s)
            .ok_or_else(|| CodeError::format(s))?;
        let start: Code = caps[1].parse()?;
        let end: Code = caps[2].parse()?;
        if end < start {
            return Err(CodeError::RangeOrder {
                input: s.to_string(),
            });
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// A comma-separated list of codes and ranges, e.g. `A98-B03, B06-B07`.
///
/// Segments keep their input order and are not merged, so overlapping
/// segments expand to repeated codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpec {
    segments: Vec<CodeRange>,
}

impl CodeSpec {
    pub fn segments(&self) -> &[CodeRange] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.segments.iter().flat_map(CodeRange::iter)
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(CodeRange::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for CodeSpec {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        let compact = strip_whitespace(s);
        let segments = compact
            .split(',')
            .map(|segment| {
                segment.parse().map_err(|source| CodeError::Segment {
                    segment: segment.to_string(),
                    spec: s.to_string(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<CodeRange>>>()?;
        Ok(Self { segments })
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|ch| !ch.is_whitespace()).collect()
}

/// Expand a single code or a code range into its individual codes.
///
/// ```
/// use mort_model::code::expand;
///
/// let codes: Vec<String> = expand("A98-B01").unwrap().iter().map(ToString::to_string).collect();
/// assert_eq!(codes, ["A98", "A99", "B00", "B01"]);
/// ```
pub fn expand(code_range: &str) -> Result<Vec<Code>> {
    let range: CodeRange = strip_whitespace(code_range).parse()?;
    Ok(range.iter().collect())
}

/// Expand a comma-separated list of codes and ranges, preserving order and
/// duplicates.
pub fn expand_detailed(spec: &str) -> Result<Vec<Code>> {
    let spec: CodeSpec = spec.parse()?;
    Ok(spec.iter().collect())
}

/// [`expand`] for loosely typed input. Anything but text is a type error.
pub fn expand_cell(cell: &Cell) -> Result<Vec<Code>> {
    expand(require_text(cell)?)
}

/// [`expand_detailed`] for loosely typed input. Anything but text is a type
/// error.
pub fn expand_detailed_cell(cell: &Cell) -> Result<Vec<Code>> {
    expand_detailed(require_text(cell)?)
}

/// [`Code::split`] for loosely typed input.
pub fn split_cell(cell: &Cell) -> Result<(char, String)> {
    let code: Code = require_text(cell)?.parse()?;
    Ok(code.split())
}

fn require_text(cell: &Cell) -> Result<&str> {
    cell.as_text().ok_or(CodeError::Type {
        found: cell.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn successor_carries_into_next_letter() {
        assert_eq!(code("A98").successor(), Some(code("A99")));
        assert_eq!(code("A99").successor(), Some(code("B00")));
        assert_eq!(Code::MAX.successor(), None);
    }

    #[test]
    fn range_iteration_stops_at_z99() {
        let range = CodeRange::new(code("Z98"), Code::MAX).unwrap();
        assert_eq!(range.iter().count(), 2);
        assert_eq!(range.len(), 2);
    }

    #[test]
    fn range_display_collapses_single_codes() {
        assert_eq!(CodeRange::single(code("B06")).to_string(), "B06");
        assert_eq!("A98-B03".parse::<CodeRange>().unwrap().to_string(), "A98-B03");
    }

    #[test]
    fn trailing_characters_are_rejected() {
        assert!("A010".parse::<Code>().is_err());
        assert!("A98-B0100".parse::<CodeRange>().is_err());
    }
}
