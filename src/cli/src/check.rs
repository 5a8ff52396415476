/* src/cli/src/check.rs */

// `stitch check`: validate the manifest and template without writing
// anything. Exits non-zero on the first structural defect.

use anyhow::{Context, Result};
use stitch_codegen::{MarkerSet, resolve_markers};

use crate::InputArgs;
use crate::generate::{read_manifest, read_template};
use crate::inputs;
use crate::ui;

pub fn run(args: &InputArgs) -> Result<()> {
  let resolved = inputs::resolve(args, None)?;

  ui::arrow("checking manifest and template");

  let manifest = read_manifest(&resolved.manifest_path)?;
  manifest.validate().context("manifest check failed")?;
  ui::detail_ok(&format!("{} pages, no integrity issues", manifest.len()));

  let template = read_template(&resolved)?;
  let markers = resolve_markers(&template, &MarkerSet::default()).context("template check failed")?;
  let names: Vec<&str> = markers.iter().map(|m| m.kind.as_str()).collect();
  ui::detail_ok(&format!("markers resolved: {}", names.join(", ")));

  ui::ok("check passed");
  Ok(())
}
