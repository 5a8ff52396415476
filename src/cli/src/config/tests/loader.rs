/* src/cli/src/config/tests/loader.rs */

use std::io::Write;

use stitch_codegen::HistoryMode;

use super::super::{StitchConfig, find_stitch_config, load_stitch_config};

#[test]
fn full_config_parses() {
  let config: StitchConfig = toml::from_str(
    r#"
[project]
name = "acme-proto"

[manifest]
file = "crawl/pages.json"

[template]
file = "templates/router.js"

[output]
file = "src/generated/router.js"

[router]
history = "hash"
redirect = "/home"
"#,
  )
  .unwrap();

  assert_eq!(config.project.name, "acme-proto");
  assert_eq!(config.manifest.file, "crawl/pages.json");
  assert_eq!(config.template.file.as_deref(), Some("templates/router.js"));
  assert_eq!(config.output.file, "src/generated/router.js");
  assert_eq!(config.router.history, HistoryMode::Hash);
  assert_eq!(config.router.redirect, "/home");
  config.validate().unwrap();
}

#[test]
fn minimal_config_uses_defaults() {
  let config: StitchConfig = toml::from_str(
    r#"
[project]
name = "proto"
"#,
  )
  .unwrap();

  assert_eq!(config.manifest.file, "pages.json");
  assert_eq!(config.template.file, None);
  assert_eq!(config.output.file, "src/router.js");
  assert_eq!(config.router.history, HistoryMode::Web);
  assert_eq!(config.router.redirect, "/dashboard");
}

#[test]
fn invalid_redirect_rejected() {
  let config: StitchConfig = toml::from_str(
    r#"
[project]
name = "proto"

[router]
redirect = "dashboard"
"#,
  )
  .unwrap();

  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("must start with '/'"));
}

#[test]
fn find_walks_up_to_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  let nested = tmp.path().join("frontend/src");
  std::fs::create_dir_all(&nested).unwrap();

  let mut f = std::fs::File::create(tmp.path().join("stitch.toml")).unwrap();
  writeln!(f, "[project]\nname = \"proto\"").unwrap();

  let found = find_stitch_config(&nested).unwrap();
  assert_eq!(found, tmp.path().join("stitch.toml"));
}

#[test]
fn find_returns_none_without_config() {
  let tmp = tempfile::tempdir().unwrap();
  // Guard against a stitch.toml in an ancestor of the temp dir; none is
  // expected on a clean system.
  assert!(find_stitch_config(tmp.path()).is_none());
}

#[test]
fn load_reports_parse_errors_with_path() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("stitch.toml");
  std::fs::write(&path, "not valid toml [").unwrap();

  let err = load_stitch_config(&path).unwrap_err();
  assert!(err.to_string().contains("failed to parse"));
}
