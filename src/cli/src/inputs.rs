/* src/cli/src/inputs.rs */

// Resolves CLI flags + stitch.toml into concrete generation inputs.
// Flags win over config values; paths from stitch.toml resolve relative
// to the directory containing it, flag paths relative to the cwd.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use stitch_codegen::HistoryMode;

use crate::InputArgs;
use crate::config::{StitchConfig, find_stitch_config, load_stitch_config};
use crate::ui::{self, DIM, RESET};

#[derive(Debug)]
pub struct RunInputs {
  pub manifest_path: PathBuf,
  /// None means the built-in skeleton is generated from `history` and
  /// `fallback_redirect`.
  pub template_path: Option<PathBuf>,
  pub out_path: PathBuf,
  pub history: HistoryMode,
  pub fallback_redirect: String,
}

pub fn resolve(args: &InputArgs, out: Option<&Path>) -> Result<RunInputs> {
  let loaded: Option<(StitchConfig, PathBuf)> = match &args.config {
    Some(path) => Some((load_stitch_config(path)?, config_base(path))),
    None => {
      let cwd = std::env::current_dir().context("failed to resolve current directory")?;
      match find_stitch_config(&cwd) {
        Some(path) => {
          ui::detail(&format!("{DIM}using {}{RESET}", path.display()));
          Some((load_stitch_config(&path)?, config_base(&path)))
        }
        None => None,
      }
    }
  };

  let manifest_path = if let Some(flag) = &args.manifest {
    flag.clone()
  } else if let Some((cfg, base)) = &loaded {
    base.join(&cfg.manifest.file)
  } else {
    bail!("no stitch.toml found and --manifest not given");
  };

  let template_path = if let Some(flag) = &args.template {
    Some(flag.clone())
  } else if let Some((cfg, base)) = &loaded {
    cfg.template.file.as_ref().map(|f| base.join(f))
  } else {
    None
  };

  let out_path = if let Some(flag) = out {
    flag.to_path_buf()
  } else if let Some((cfg, base)) = &loaded {
    base.join(&cfg.output.file)
  } else {
    PathBuf::from("src/router.js")
  };

  let history = match &args.history {
    Some(raw) => raw.parse::<HistoryMode>().map_err(|e| anyhow!(e))?,
    None => loaded.as_ref().map(|(cfg, _)| cfg.router.history).unwrap_or_default(),
  };

  let fallback_redirect = loaded
    .as_ref()
    .map_or_else(|| "/dashboard".to_string(), |(cfg, _)| cfg.router.redirect.clone());

  Ok(RunInputs { manifest_path, template_path, out_path, history, fallback_redirect })
}

fn config_base(config_path: &Path) -> PathBuf {
  config_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf()
}
