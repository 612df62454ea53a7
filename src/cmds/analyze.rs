/* Analyze command - print the conversion IR for the type catalog */

use crate::catalog::{self, TypeSpec};
use crate::codegen::shared::builder::build_conversion;
use crate::codegen::shared::ir::{ConversionIr, Endianness};

/* Execute the analyze command */
pub fn run(type_filter: Option<String>) -> anyhow::Result<()> {
  let specs: Vec<&TypeSpec> = catalog::CATALOG
    .iter()
    .filter(|spec| type_filter.as_deref().map_or(true, |name| spec.name == name))
    .collect();

  if specs.is_empty() {
    anyhow::bail!(
      "no catalog type named '{}'",
      type_filter.unwrap_or_default()
    );
  }

  let mut conversions: Vec<ConversionIr> = Vec::new();
  for spec in specs {
    conversions.push(build_conversion(spec, Endianness::Big)?);
    if spec.width_bytes > 1 {
      conversions.push(build_conversion(spec, Endianness::Little)?);
    }
  }

  println!("{}", serde_json::to_string_pretty(&conversions)?);
  Ok(())
}
