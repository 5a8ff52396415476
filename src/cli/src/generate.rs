/* src/cli/src/generate.rs */

// `stitch generate`: read the page manifest (and template, when one is
// configured), run the generation pipeline, write the router module.

use std::path::Path;

use anyhow::{Context, Result};
use stitch_codegen::{GenerationOutput, GenerationPipeline, MarkerSet, PageManifest, default_template};

use crate::GenerateArgs;
use crate::inputs::{self, RunInputs};
use crate::ui::{self, DIM, RESET};

pub fn run(args: &GenerateArgs) -> Result<()> {
  let resolved = inputs::resolve(&args.inputs, args.out.as_deref())?;

  ui::arrow("generating router module");
  let output = run_pipeline(&resolved)?;

  if let Some(parent) = resolved.out_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&resolved.out_path, &output.artifact)
    .with_context(|| format!("failed to write {}", resolved.out_path.display()))?;

  ui::detail_ok(&format!(
    "{} pages \u{2192} {} ({})",
    output.report.entry_count,
    resolved.out_path.display(),
    ui::format_size(output.report.output_bytes as u64)
  ));
  ui::ok("generate complete");
  Ok(())
}

pub(crate) fn run_pipeline(resolved: &RunInputs) -> Result<GenerationOutput> {
  let manifest = read_manifest(&resolved.manifest_path)?;
  let template = read_template(resolved)?;

  let mut pipeline = GenerationPipeline::new(MarkerSet::default());
  let output = pipeline.run(&manifest, &template).context("generation failed")?;
  Ok(output)
}

pub(crate) fn read_manifest(path: &Path) -> Result<PageManifest> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read page manifest at {}", path.display()))?;
  let manifest: PageManifest = serde_json::from_str(&content)
    .with_context(|| format!("failed to parse page manifest at {}", path.display()))?;
  Ok(manifest)
}

pub(crate) fn read_template(resolved: &RunInputs) -> Result<String> {
  match &resolved.template_path {
    Some(path) => {
      ui::detail(&format!("{DIM}template {}{RESET}", path.display()));
      std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template at {}", path.display()))
    }
    None => {
      ui::detail(&format!(
        "{DIM}built-in skeleton ({} history){RESET}",
        resolved.history.as_str()
      ));
      Ok(default_template(resolved.history, &resolved.fallback_redirect))
    }
  }
}
