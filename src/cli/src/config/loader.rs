/* src/cli/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::types::StitchConfig;

pub const CONFIG_FILE: &str = "stitch.toml";

/// Walk up from `start` looking for stitch.toml. None when no config
/// exists anywhere above; commands driven entirely by flags still work.
pub fn find_stitch_config(start: &Path) -> Option<PathBuf> {
  let mut dir = start.to_path_buf();
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Some(candidate);
    }
    if !dir.pop() {
      return None;
    }
  }
}

pub fn load_stitch_config(path: &Path) -> Result<StitchConfig> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read {}", path.display()))?;
  let config: StitchConfig = toml::from_str(&content)
    .with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}
