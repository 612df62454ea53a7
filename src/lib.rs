//! # byteconverter-gen
//!
//! One-shot generator for a fixed library of byte-array-to-integer
//! conversion routines. The output is a C# `ByteConverter` class covering
//! 16-, 32-, and 64-bit signed and unsigned integers, each readable from a
//! buffer in big-endian or little-endian byte order.
//!
//! The crate is split into a language-neutral conversion IR
//! ([`codegen::shared`]) built from the fixed type catalog ([`catalog`]),
//! and a C# emitter ([`codegen::csharp`]) that renders the IR into source
//! text. Generation is pure and deterministic: the same catalog always
//! produces the same output, excluding the date stamped into the banner.
//!
//! # Example
//! ```
//! use byteconverter_gen::catalog;
//! use byteconverter_gen::codegen::csharp::{CsCodeGenerator, CsCodeGeneratorOptions};
//!
//! let generator = CsCodeGenerator::new(CsCodeGeneratorOptions::default());
//! let code = generator.emit_code(catalog::CATALOG).unwrap();
//! assert!(code.contains("static class ByteConverter {"));
//! assert!(code.contains("public static ushort ToUshort_Big(byte[] data, int offset = 0){"));
//! ```

pub mod catalog;
pub mod cmds;
pub mod codegen;
