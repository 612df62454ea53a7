//! The fixed catalog of integer types covered by the generated library.

/// One entry in the conversion catalog.
///
/// Signedness is an explicit attribute; nothing downstream infers it from
/// the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Target-language type identifier, exactly as it appears in emitted code.
    pub name: &'static str,
    /// Encoded width in bytes. Must be 1, 2, 4, or 8.
    pub width_bytes: usize,
    pub signed: bool,
}

/// The six catalog entries, in emission order: 16-, 32-, and 64-bit signed
/// and unsigned integers.
pub const CATALOG: &[TypeSpec] = &[
    TypeSpec {
        name: "short",
        width_bytes: 2,
        signed: true,
    },
    TypeSpec {
        name: "ushort",
        width_bytes: 2,
        signed: false,
    },
    TypeSpec {
        name: "int",
        width_bytes: 4,
        signed: true,
    },
    TypeSpec {
        name: "uint",
        width_bytes: 4,
        signed: false,
    },
    TypeSpec {
        name: "long",
        width_bytes: 8,
        signed: true,
    },
    TypeSpec {
        name: "ulong",
        width_bytes: 8,
        signed: false,
    },
];
