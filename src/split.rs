//! Splitting an AI payload into its fields.
//!
//! The payload carries no separators, so each step consults the
//! [registry](crate::registry) for the AI at the head of the remaining
//! input, carves off the AI code and its data field, and continues on the
//! rest. [`decode`] renders the fields into the bracketed convention;
//! [`fields`] exposes them one by one for callers doing their own
//! assembly.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::registry::{self, Width};

/// A single Application Identifier and the data field following it.
///
/// Both halves borrow from the decoded input. The AI code includes the
/// variant digit where the registry calls for one, so `ai` for a weight
/// field reads `3103`, not `310`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// The AI code.
    pub ai: &'a str,
    /// The data characters belonging to this AI.
    pub data: &'a str,
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", self.ai, self.data)
    }
}

/// An error splitting one field from the head of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// No Application Identifier matches the remaining input.
    #[error("No Application Identifier matches the remaining input.")]
    UnknownAi,
    /// Too few characters remain for the matched Application Identifier.
    #[error("Too few characters remain for the matched Application Identifier.")]
    Truncated,
}

/// An error decoding an AI payload.
///
/// Fields split before the failure point are retained in [`Error::parsed`],
/// already rendered in bracketed form. Callers wanting an all-or-nothing
/// decode should discard it; callers tolerant of trailing garbage may keep
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The failure that stopped decoding.
    pub kind: SplitError,
    /// The bracketed rendering of every field split before the failure.
    pub parsed: String,
}

/// Split one AI and its data field from the head of the input.
///
/// Returns the field and the remaining, unconsumed input. Fixed-width
/// fields require their full declared width; variable-width fields require
/// at least one character and greedily take up to their declared maximum.
pub fn split_first(input: &str) -> Result<(Field<'_>, &str), SplitError> {
    let entry = registry::lookup(input).ok_or(SplitError::UnknownAi)?;
    let ai_len = entry.ai_len();

    let minimum = ai_len
        + match entry.width {
            Width::Fixed(len) => len,
            Width::Variable(_) => 1,
        };
    if input.len() < minimum {
        return Err(SplitError::Truncated);
    }

    let width = match entry.width {
        Width::Fixed(len) => len,
        Width::Variable(max) => max.min(input.len() - ai_len),
    };

    // AI data is drawn from ISO/IEC 646, so a boundary landing inside a
    // multi-byte sequence cannot begin a valid field.
    let (ai, tail) = input.split_at_checked(ai_len).ok_or(SplitError::Truncated)?;
    let (data, rest) = tail.split_at_checked(width).ok_or(SplitError::Truncated)?;

    Ok((Field { ai, data }, rest))
}

/// Iterate over the AI fields of a payload.
///
/// The iterator yields each field in input order, then an error item if the
/// remaining input stops matching the registry. Empty input yields nothing.
pub fn fields(input: &str) -> Fields<'_> {
    Fields { rest: input }
}

/// Iterator over the AI fields of a payload, returned by [`fields`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<Field<'a>, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match split_first(self.rest) {
            Ok((field, rest)) => {
                self.rest = rest;
                Some(Ok(field))
            }
            Err(err) => {
                // Exhaust the iterator; resynchronizing after a bad field
                // is not possible without separators.
                self.rest = "";
                Some(Err(err))
            }
        }
    }
}

/// Decode an AI payload into its bracketed representation.
///
/// Each field becomes `(` + AI code + `)` + data, concatenated in input
/// order with no separators. Empty input decodes to an empty string.
/// Decoding stops at the first position where no registry prefix matches or
/// too few characters remain for the matched AI; the fields split up to
/// that point travel in the returned [`Error`].
///
/// This function is also re-exported as `placard::decode`.
pub fn decode(input: &str) -> Result<String, Error> {
    let mut out = String::new();

    for field in fields(input) {
        match field {
            Ok(field) => {
                out.push('(');
                out.push_str(field.ai);
                out.push(')');
                out.push_str(field.data);
            }
            Err(kind) => return Err(Error { kind, parsed: out }),
        }
    }

    Ok(out)
}
