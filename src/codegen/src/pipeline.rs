/* src/codegen/src/pipeline.rs */

// Orchestrates one generation run: resolve markers, render blocks,
// assemble. Strictly sequential, non-retrying; the first failure aborts
// the remaining stages and no partial artifact escapes.

use std::collections::BTreeMap;

use crate::assemble::assemble;
use crate::error::GenerateError;
use crate::manifest::PageManifest;
use crate::marker::{MarkerKind, MarkerSet, resolve_markers};
use crate::routes::{render_import_block, render_route_block};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
  Resolving,
  Building,
  Assembling,
  Done,
  Failed,
}

/// Diagnostics for the caller to log; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
  pub entry_count: usize,
  pub markers: Vec<MarkerKind>,
  pub output_bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
  pub artifact: String,
  pub report: GenerationReport,
}

#[derive(Debug, Clone)]
pub struct GenerationPipeline {
  markers: MarkerSet,
  stage: PipelineStage,
}

impl GenerationPipeline {
  pub fn new(markers: MarkerSet) -> Self {
    Self { markers, stage: PipelineStage::Resolving }
  }

  /// Stage the last `run` call reached; `Failed` after any error.
  pub fn stage(&self) -> PipelineStage {
    self.stage
  }

  pub fn run(
    &mut self,
    manifest: &PageManifest,
    template: &str,
  ) -> Result<GenerationOutput, GenerateError> {
    match self.advance(manifest, template) {
      Ok(output) => {
        self.stage = PipelineStage::Done;
        Ok(output)
      }
      Err(err) => {
        self.stage = PipelineStage::Failed;
        Err(err)
      }
    }
  }

  fn advance(
    &mut self,
    manifest: &PageManifest,
    template: &str,
  ) -> Result<GenerationOutput, GenerateError> {
    self.stage = PipelineStage::Resolving;
    let markers = resolve_markers(template, &self.markers)?;

    self.stage = PipelineStage::Building;
    manifest.validate()?;
    let mut blocks = BTreeMap::new();
    for marker in &markers {
      let block = match marker.kind {
        MarkerKind::Imports => render_import_block(manifest, &marker.indent),
        MarkerKind::Routes => render_route_block(manifest, &marker.indent),
      };
      blocks.insert(marker.kind, block);
    }

    self.stage = PipelineStage::Assembling;
    let artifact = assemble(template, &markers, &blocks);

    let report = GenerationReport {
      entry_count: manifest.len(),
      markers: markers.iter().map(|m| m.kind).collect(),
      output_bytes: artifact.len(),
    };
    Ok(GenerationOutput { artifact, report })
  }
}

/// One generation run with the default sentinel registry.
pub fn generate(
  manifest: &PageManifest,
  template: &str,
) -> Result<GenerationOutput, GenerateError> {
  GenerationPipeline::new(MarkerSet::default()).run(manifest, template)
}
