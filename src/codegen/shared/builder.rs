use super::ir::{ByteTerm, ConversionIr, Endianness};
use crate::catalog::TypeSpec;
use thiserror::Error;

/// Width of the target's native arithmetic word in bytes. Byte-level
/// operands implicitly widen to a signed integer of this width before any
/// shifting happens.
const NATIVE_WORD_BYTES: usize = 4;

/// Builds the conversion IR for one (type, byte order) pair.
///
/// The caller decides which pairs to request; multi-byte types get one IR
/// per byte order, width-1 types a single order-agnostic one.
pub fn build_conversion(
    spec: &TypeSpec,
    endianness: Endianness,
) -> Result<ConversionIr, IrBuildError> {
    if !matches!(spec.width_bytes, 1 | 2 | 4 | 8) {
        return Err(IrBuildError::UnsupportedWidth {
            type_name: spec.name.to_string(),
            width_bytes: spec.width_bytes,
        });
    }

    /* Default arithmetic form: the signedness the type already has after
       the target's implicit promotion. Multi-byte reads widen to the
       signed native word; a lone byte is unsigned as read. */
    let default_form = if spec.width_bytes == 1 {
        !spec.signed
    } else {
        spec.signed
    };

    /* Types at or below the native word in default form shift correctly
       without touching each read; everything else casts every byte to the
       declared type before it is shifted into a high position. */
    let per_byte_cast = !(spec.width_bytes <= NATIVE_WORD_BYTES && default_form);

    /* The OR-reduction lands in the promoted form, so non-default types
       cast the result back to the declared type. Two-byte types always
       do: the promoted reduction is wider than the declared width. A
       single byte never shifts and needs no outer cast. */
    let outer_cast = (!default_form || spec.width_bytes == 2) && spec.width_bytes > 1;

    let mut terms = Vec::with_capacity(spec.width_bytes);
    for index in 0..spec.width_bytes {
        let shift_bytes = match endianness {
            Endianness::Big => spec.width_bytes - index - 1,
            Endianness::Little => index,
        };
        terms.push(ByteTerm {
            index,
            shift_bits: (shift_bytes * 8) as u32,
        });
    }

    let mut function_name = format!("To{}", capitalize(spec.name));
    if spec.width_bytes > 1 {
        function_name.push_str(endianness.name_suffix());
    }

    Ok(ConversionIr {
        type_name: spec.name.to_string(),
        width_bytes: spec.width_bytes,
        signed: spec.signed,
        endianness,
        function_name,
        per_byte_cast,
        outer_cast,
        terms,
    })
}

/* First character uppercased, the rest lowercased */
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum IrBuildError {
    #[error("type '{type_name}' has unsupported byte width {width_bytes} (expected 1, 2, 4, or 8)")]
    UnsupportedWidth {
        type_name: String,
        width_bytes: usize,
    },
}
