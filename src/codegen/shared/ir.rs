//! Shared conversion IR consumed by the emitter backends.
//!
//! The IR describes one conversion function in language-neutral terms: the
//! declared type, which shift each byte index receives, and which casts the
//! target's promotion model requires. Backends render it directly; the
//! `analyze` command exports it as JSON.

use serde_derive::{Deserialize, Serialize};

/// Byte order of a multi-byte encoding. Mirrors the `Endianness`
/// enumeration the generated library itself declares (`Little = 0`,
/// `Big = 1`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Function-name suffix for multi-byte conversions.
    pub fn name_suffix(self) -> &'static str {
        match self {
            Endianness::Little => "_Little",
            Endianness::Big => "_Big",
        }
    }

    /// The byte order spelled out for documentation comments.
    pub fn in_words(self) -> &'static str {
        match self {
            Endianness::Little => "in little endian",
            Endianness::Big => "in big endian",
        }
    }
}

/// A single byte read, shifted into its bit position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ByteTerm {
    /// Byte index relative to `offset`.
    pub index: usize,
    /// Left shift applied to the read. Zero elides the shift operator.
    pub shift_bits: u32,
}

/// Description of a single conversion function, produced fresh per
/// (type, byte order) request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionIr {
    /// Declared type of the reconstructed value.
    pub type_name: String,
    pub width_bytes: usize,
    pub signed: bool,
    pub endianness: Endianness,
    /// Emitted function name, endianness suffix included where applicable.
    pub function_name: String,
    /// True when each byte read is cast to the declared type before
    /// shifting.
    pub per_byte_cast: bool,
    /// True when the combined OR-expression is cast back to the declared
    /// type.
    pub outer_cast: bool,
    /// One term per byte index, combined with bitwise OR in index order.
    pub terms: Vec<ByteTerm>,
}
