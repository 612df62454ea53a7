use crate::codegen::shared::ir::{ByteTerm, ConversionIr};

/// Receiver parameter type of a generated conversion function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    Array,
    Span,
}

impl Receiver {
    fn cs_type(self) -> &'static str {
        match self {
            Receiver::Array => "byte[]",
            Receiver::Span => "ReadOnlySpan<byte>",
        }
    }
}

/// One generated conversion function, held as its parts.
///
/// Produced fresh per request and immediately rendered to text; it has no
/// identity beyond its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFunction {
    /// The single content line of the XML documentation comment.
    pub documentation: String,
    /// Accessibility modifiers, return type, name, and parameter list.
    pub signature: String,
    /// The single return statement.
    pub body: String,
}

impl GeneratedFunction {
    /// Renders the function as C# source: the doc comment, the signature
    /// with the opening brace, and the body on its own indented line.
    pub fn render(&self) -> String {
        format!(
            "/// <summary>\n/// {}\n/// </summary>\n{}{{\n  {}\n}}",
            self.documentation, self.signature, self.body
        )
    }
}

/// Builds the conversion function for `ir` with the given receiver type.
pub fn build_conversion_fn(ir: &ConversionIr, receiver: Receiver) -> GeneratedFunction {
    let documentation = format!(
        "Converts {} bytes at <paramref name=\"offset\"/> to <see cref=\"{}\"/>, {}",
        ir.width_bytes,
        ir.type_name,
        ir.endianness.in_words()
    );
    let signature = format!(
        "public static {} {}({} data, int offset = 0)",
        ir.type_name,
        ir.function_name,
        receiver.cs_type()
    );
    let body = format!("return {};", render_expression(ir));

    GeneratedFunction {
        documentation,
        signature,
        body,
    }
}

/// Builds and renders in one step.
pub fn emit_conversion_fn(ir: &ConversionIr, receiver: Receiver) -> String {
    build_conversion_fn(ir, receiver).render()
}

fn render_expression(ir: &ConversionIr) -> String {
    let terms: Vec<String> = ir.terms.iter().map(|term| render_term(ir, term)).collect();
    let combined = terms.join(" | ");
    if ir.outer_cast {
        format!("({})({})", ir.type_name, combined)
    } else {
        combined
    }
}

/* Shifted terms are parenthesized so the OR combination never depends on
   precedence; an unshifted term stands bare. */
fn render_term(ir: &ConversionIr, term: &ByteTerm) -> String {
    let prefix = if ir.per_byte_cast {
        format!("({})", ir.type_name)
    } else {
        String::new()
    };
    let read = if term.index == 0 {
        "data[offset]".to_string()
    } else {
        format!("data[offset + {}]", term.index)
    };
    if term.shift_bits > 0 {
        format!("({}{} << {})", prefix, read, term.shift_bits)
    } else {
        format!("{}{}", prefix, read)
    }
}
