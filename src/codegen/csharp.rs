use crate::catalog::TypeSpec;
use crate::codegen::csharp_gen::{Receiver, emit_conversion_fn, indent_lines};
use crate::codegen::shared::builder::{IrBuildError, build_conversion};
use crate::codegen::shared::ir::Endianness;
use chrono::NaiveDate;
use tracing::debug;

pub struct CsCodeGenerator {
    options: CsCodeGeneratorOptions,
}

pub struct CsCodeGeneratorOptions {
    /// Date stamped into the auto-generation banner.
    pub generation_date: NaiveDate,
    /// Also emit a `ReadOnlySpan<byte>` receiver overload for every
    /// function.
    pub emit_span_overloads: bool,
}

impl Default for CsCodeGeneratorOptions {
    fn default() -> Self {
        Self {
            generation_date: chrono::Local::now().date_naive(),
            emit_span_overloads: true,
        }
    }
}

impl CsCodeGenerator {
    pub fn new(options: CsCodeGeneratorOptions) -> Self {
        Self { options }
    }

    /// Emits the complete ByteConverter library for `catalog`.
    ///
    /// Functions appear in catalog order; each multi-byte type gets its
    /// big-endian function first, then the little-endian one. Width-1
    /// entries are emitted once, without an order suffix.
    pub fn emit_code(self, catalog: &[TypeSpec]) -> Result<String, IrBuildError> {
        let mut output = self.emit_header();

        for spec in catalog {
            output.push_str(&self.emit_functions_for_type(spec, Endianness::Big)?);
            if spec.width_bytes > 1 {
                output.push_str(&self.emit_functions_for_type(spec, Endianness::Little)?);
            }
        }

        output.push_str("\n}\n");
        Ok(output)
    }

    fn emit_header(&self) -> String {
        let mut header = format!(
            "// THIS FILE IS AUTO GENERATED, DATE={}\n",
            self.options.generation_date
        );
        header.push_str("enum Endianness\n{\n  Little = 0,\n  Big = 1\n}\n\n");
        header.push_str("static class ByteConverter {\n");
        header
    }

    /* One emission unit: the byte[] function plus, when enabled, its span
       overload directly below it. Units are separated by a blank line;
       overloads within a unit are not. */
    fn emit_functions_for_type(
        &self,
        spec: &TypeSpec,
        endianness: Endianness,
    ) -> Result<String, IrBuildError> {
        let ir = build_conversion(spec, endianness)?;
        debug!(
            type_name = spec.name,
            function = %ir.function_name,
            "emitting conversion function"
        );

        let mut unit = emit_conversion_fn(&ir, Receiver::Array);
        if self.options.emit_span_overloads {
            unit.push('\n');
            unit.push_str(&emit_conversion_fn(&ir, Receiver::Span));
        }

        let mut output = indent_lines(&unit);
        output.push_str("\n\n");
        Ok(output)
    }
}
