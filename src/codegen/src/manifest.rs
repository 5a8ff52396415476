/* src/codegen/src/manifest.rs */

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Path of the static fallback redirect route every template carries as
/// its first entry. Manifest entries may not claim it.
pub const FALLBACK_PATH: &str = "/";

/// One page discovered by the crawler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
  pub path: String,
  #[serde(rename = "componentName")]
  pub component_name: String,
  #[serde(rename = "componentModulePath")]
  pub component_module_path: String,
}

/// Ordered set of discovered pages. Manifest order is the output order:
/// entry N of the manifest becomes import line N and route entry N+1
/// (after the fallback) of the generated module. The crawler builds this
/// once per run; the pipeline never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageManifest {
  pub pages: Vec<PageEntry>,
}

impl PageManifest {
  pub fn len(&self) -> usize {
    self.pages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pages.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, PageEntry> {
    self.pages.iter()
  }

  /// Fail-fast structural check, run before any text is rendered so a
  /// bad manifest never produces partial output.
  pub fn validate(&self) -> Result<(), GenerateError> {
    let mut seen_paths = BTreeSet::new();
    let mut seen_names = BTreeSet::new();

    for (index, entry) in self.pages.iter().enumerate() {
      if !entry.path.starts_with('/') {
        return Err(integrity(index, format!("path \"{}\" must start with '/'", entry.path)));
      }
      if entry.path == FALLBACK_PATH {
        return Err(integrity(
          index,
          format!("path \"{FALLBACK_PATH}\" collides with the static fallback route"),
        ));
      }
      check_embeddable(index, "path", &entry.path)?;

      if !is_identifier(&entry.component_name) {
        return Err(integrity(
          index,
          format!("componentName \"{}\" is not a valid identifier", entry.component_name),
        ));
      }

      if entry.component_module_path.is_empty() {
        return Err(integrity(index, "componentModulePath must not be empty".to_string()));
      }
      check_embeddable(index, "componentModulePath", &entry.component_module_path)?;

      if !seen_paths.insert(entry.path.as_str()) {
        return Err(integrity(index, format!("duplicate path \"{}\"", entry.path)));
      }
      if !seen_names.insert(entry.component_name.as_str()) {
        return Err(integrity(
          index,
          format!("duplicate componentName \"{}\"", entry.component_name),
        ));
      }
    }

    Ok(())
  }
}

fn integrity(index: usize, reason: String) -> GenerateError {
  GenerateError::ManifestIntegrity { index, reason }
}

/// Values are emitted inside single-quoted JS string literals; anything
/// that would terminate or mangle the literal is rejected up front.
fn check_embeddable(index: usize, field: &str, value: &str) -> Result<(), GenerateError> {
  if let Some(bad) = value.chars().find(|c| *c == '\'' || *c == '\\' || c.is_control()) {
    return Err(GenerateError::Encoding {
      index,
      reason: format!("{field} contains {bad:?}"),
    });
  }
  Ok(())
}

fn is_identifier(s: &str) -> bool {
  let mut chars = s.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
