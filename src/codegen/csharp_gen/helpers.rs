/* Small text helpers shared by the C# emitters */

/// One indentation level inside the generated container declaration.
pub const INDENT: &str = "  ";

/// Indents every line of `text` by one level.
pub fn indent_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + INDENT.len() * 8);
    out.push_str(INDENT);
    out.push_str(&text.replace('\n', "\n  "));
    out
}
