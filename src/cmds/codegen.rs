/* Codegen command - emit the ByteConverter source library */

use crate::catalog;
use crate::codegen::csharp::{CsCodeGenerator, CsCodeGeneratorOptions};
use std::fs;
use std::path::PathBuf;

/* Execute the codegen command. Progress lines go to stderr - stdout
   carries the generated source when no output file is given. */
pub fn run(output: Option<PathBuf>, span_overloads: bool, verbose: bool) -> anyhow::Result<()> {
  if verbose {
    eprintln!("ByteConverter Generator");
    eprintln!("=======================\n");
    eprintln!("[~] Configuration:");
    eprintln!("  Catalog types: {}", catalog::CATALOG.len());
    match &output {
      Some(path) => eprintln!("  Output file: {}", path.display()),
      None => eprintln!("  Output: stdout"),
    }
    eprintln!("  Span overloads: {}", span_overloads);
    eprintln!();
  }

  let options = CsCodeGeneratorOptions {
    emit_span_overloads: span_overloads,
    ..Default::default()
  };
  let generator = CsCodeGenerator::new(options);
  let code = generator.emit_code(catalog::CATALOG)?;

  let function_count = conversion_function_count(span_overloads);

  match output {
    Some(path) => {
      fs::write(&path, &code)?;
      if verbose {
        eprintln!(
          "[✓] Generated {} conversion functions in {}",
          function_count,
          path.display()
        );
      }
    }
    None => {
      print!("{}", code);
      if verbose {
        eprintln!("[✓] Generated {} conversion functions", function_count);
      }
    }
  }

  Ok(())
}

/* One function per byte order for multi-byte types, a single one for
   width-1 entries, doubled when span overloads are on */
fn conversion_function_count(span_overloads: bool) -> usize {
  let per_receiver: usize = catalog::CATALOG
    .iter()
    .map(|spec| if spec.width_bytes > 1 { 2 } else { 1 })
    .sum();
  if span_overloads { per_receiver * 2 } else { per_receiver }
}
