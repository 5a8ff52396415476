/* src/codegen/src/template.rs */

use serde::Deserialize;

/// Client-side history strategy the generated module selects. Only the
/// factory name in the emitted configuration changes; the runtime
/// behavior belongs to vue-router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
  #[default]
  Web,
  Hash,
  Memory,
}

impl HistoryMode {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Web => "web",
      Self::Hash => "hash",
      Self::Memory => "memory",
    }
  }

  /// vue-router factory function emitted into the template.
  pub fn factory(self) -> &'static str {
    match self {
      Self::Web => "createWebHistory",
      Self::Hash => "createWebHashHistory",
      Self::Memory => "createMemoryHistory",
    }
  }
}

impl std::str::FromStr for HistoryMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "web" => Ok(Self::Web),
      "hash" => Ok(Self::Hash),
      "memory" => Ok(Self::Memory),
      other => Err(format!("unknown history mode \"{other}\" (expected web, hash, or memory)")),
    }
  }
}

const SKELETON: &str = "\
import { createRouter, __HISTORY__ } from 'vue-router'

// Page components discovered by the crawler
// {{ROUTE_IMPORTS}}
// {{/ROUTE_IMPORTS}}

const routes = [
  { path: '/', redirect: '__REDIRECT__' },
  // {{ROUTES}}
  // {{/ROUTES}}
]

export default createRouter({
  history: __HISTORY__(),
  routes
})
";

/// Built-in router skeleton, used when the caller supplies no template of
/// its own. Carries the default sentinel pairs and the static fallback
/// redirect as the first route entry.
pub fn default_template(history: HistoryMode, fallback_redirect: &str) -> String {
  SKELETON.replace("__HISTORY__", history.factory()).replace("__REDIRECT__", fallback_redirect)
}
