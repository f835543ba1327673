#![no_std]

//! A decoder for the GS1 Application Identifier data carried in DataBar
//! barcodes.
//!
//! DataBar Expanded symbols carry a "general purpose" payload: a run of GS1
//! Application Identifier (AI) codes, each immediately followed by its data
//! field, with no separators between them. Field boundaries are recovered
//! entirely from the width rules in the AI registry. Placard turns such a
//! payload into the conventional bracketed form:
//!
//! ```text
//! 011234567890123110ABC123  →  (01)12345678901231(10)ABC123
//! ```
//!
//! Most users should begin with [`decode`]. Applications wanting the
//! individual fields rather than a rendered string can walk them with
//! [`split::fields`].
//!
//! Decoding is best effort: when no registry prefix matches the remaining
//! input, or too few characters remain for the matched AI, decoding stops
//! there, and the fields split up to that point are retained in the returned
//! [`Error`]. Strict callers should discard them; tolerant callers may keep
//! the prefix that did parse.
//!
//! Placard operates on an already-extracted string. Symbol detection,
//! bit-stream decoding, and check digit validation are the business of the
//! surrounding barcode reader, as is the FNC1-delimited flavor of
//! variable-length fields: this decoder derives every boundary from the
//! declared maximum width alone.

extern crate alloc;

pub mod registry;
pub mod split;

pub use split::{Error, decode};
