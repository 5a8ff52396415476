/* src/cli/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;
use stitch_codegen::HistoryMode;

#[derive(Debug, Clone, Deserialize)]
pub struct StitchConfig {
  pub project: ProjectSection,
  #[serde(default)]
  pub manifest: ManifestSection,
  #[serde(default)]
  pub template: TemplateSection,
  #[serde(default)]
  pub output: OutputSection,
  #[serde(default)]
  pub router: RouterSection,
}

impl StitchConfig {
  pub fn validate(&self) -> Result<()> {
    if self.project.name.is_empty() {
      bail!("project.name must not be empty");
    }
    if !self.router.redirect.starts_with('/') {
      bail!("router.redirect \"{}\" must start with '/'", self.router.redirect);
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSection {
  /// Page manifest JSON emitted by the crawler.
  #[serde(default = "default_manifest_file")]
  pub file: String,
}

impl Default for ManifestSection {
  fn default() -> Self {
    Self { file: default_manifest_file() }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateSection {
  /// Router template with sentinel markers. Absent means the built-in
  /// skeleton is used.
  #[serde(default)]
  pub file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSection {
  #[serde(default = "default_output_file")]
  pub file: String,
}

impl Default for OutputSection {
  fn default() -> Self {
    Self { file: default_output_file() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouterSection {
  #[serde(default)]
  pub history: HistoryMode,
  /// Target of the static fallback route in the built-in skeleton.
  #[serde(default = "default_redirect")]
  pub redirect: String,
}

impl Default for RouterSection {
  fn default() -> Self {
    Self { history: HistoryMode::default(), redirect: default_redirect() }
  }
}

fn default_manifest_file() -> String {
  "pages.json".to_string()
}

fn default_output_file() -> String {
  "src/router.js".to_string()
}

fn default_redirect() -> String {
  "/dashboard".to_string()
}
