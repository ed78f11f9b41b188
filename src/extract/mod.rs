//! C array literal extraction.
//!
//! Finds `const int16_t name[] = { ... };` and `const size_t name[] = { ... };`
//! declarations in source text and parses their integer elements. Only these
//! two declaration shapes are recognized.

mod declaration;
mod scanner;

use crate::error::{Error, Result};

/// Element type of a declared array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `int16_t` audio samples.
    Int16,
    /// `size_t` offsets.
    Size,
}

impl ElementKind {
    /// C type keyword that introduces declarations of this kind.
    pub const fn type_keyword(self) -> &'static str {
        match self {
            Self::Int16 => "int16_t",
            Self::Size => "size_t",
        }
    }

    /// Whether literals may carry a leading minus sign.
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::Int16)
    }

    fn accepts(self, value: i64) -> bool {
        match self {
            Self::Int16 => i16::try_from(value).is_ok(),
            Self::Size => usize::try_from(value).is_ok(),
        }
    }
}

/// Extract the elements of the first array declared as `name` with the given
/// element kind.
///
/// Literals that do not fit the element kind are rejected rather than
/// wrapped or truncated.
pub fn extract_array(text: &str, name: &str, kind: ElementKind) -> Result<Vec<i64>> {
    let start = declaration::find_body_start(text, name, kind).ok_or_else(|| {
        Error::ArrayNotFound {
            name: name.to_string(),
        }
    })?;

    let body = scanner::isolate_body(&text[start..]).ok_or_else(|| Error::UnterminatedArray {
        name: name.to_string(),
    })?;

    scanner::integer_literals(&body, kind.is_signed())
        .into_iter()
        .enumerate()
        .map(|(index, literal)| {
            literal
                .parse::<i64>()
                .ok()
                .filter(|&value| kind.accepts(value))
                .ok_or_else(|| out_of_range(name, index, literal))
        })
        .collect()
}

/// Extract an `int16_t` sample array.
pub fn extract_samples(text: &str, name: &str) -> Result<Vec<i16>> {
    extract_array(text, name, ElementKind::Int16)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            i16::try_from(value).map_err(|_| out_of_range(name, index, &value.to_string()))
        })
        .collect()
}

/// Extract a `size_t` offsets array.
pub fn extract_offsets(text: &str, name: &str) -> Result<Vec<usize>> {
    extract_array(text, name, ElementKind::Size)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            usize::try_from(value).map_err(|_| out_of_range(name, index, &value.to_string()))
        })
        .collect()
}

fn out_of_range(name: &str, index: usize, literal: &str) -> Error {
    Error::ValueOutOfRange {
        name: name.to_string(),
        index,
        literal: literal.to_string(),
    }
}
