/* src/codegen/src/marker.rs */

// Typed insertion markers. Sentinel text lives in a registry (MarkerSet)
// so template authors can reword the comments without touching the
// resolver or the assembler.

use std::fmt;
use std::ops::Range;

use crate::error::GenerateError;

/// The two insertion points a router template must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerKind {
  Imports,
  Routes,
}

impl MarkerKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Imports => "imports",
      Self::Routes => "routes",
    }
  }
}

impl fmt::Display for MarkerKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Begin/end sentinel literals delimiting one marker's generated region.
/// Both lines survive generation so a later run can re-locate the marker
/// and replace whatever the previous run emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelPair {
  pub begin: String,
  pub end: String,
}

/// Registry of sentinel literals, one pair per marker kind.
#[derive(Debug, Clone)]
pub struct MarkerSet {
  entries: Vec<(MarkerKind, SentinelPair)>,
}

impl Default for MarkerSet {
  fn default() -> Self {
    Self {
      entries: vec![
        (
          MarkerKind::Imports,
          SentinelPair { begin: "{{ROUTE_IMPORTS}}".to_string(), end: "{{/ROUTE_IMPORTS}}".to_string() },
        ),
        (
          MarkerKind::Routes,
          SentinelPair { begin: "{{ROUTES}}".to_string(), end: "{{/ROUTES}}".to_string() },
        ),
      ],
    }
  }
}

impl MarkerSet {
  /// Replace the sentinel pair for one marker kind.
  pub fn set_sentinels(&mut self, kind: MarkerKind, begin: &str, end: &str) {
    for (k, pair) in &mut self.entries {
      if *k == kind {
        *pair = SentinelPair { begin: begin.to_string(), end: end.to_string() };
        return;
      }
    }
    self.entries.push((kind, SentinelPair { begin: begin.to_string(), end: end.to_string() }));
  }

  pub fn sentinels(&self, kind: MarkerKind) -> Option<&SentinelPair> {
    self.entries.iter().find(|(k, _)| *k == kind).map(|(_, pair)| pair)
  }

  pub fn iter(&self) -> impl Iterator<Item = (MarkerKind, &SentinelPair)> {
    self.entries.iter().map(|(k, pair)| (*k, pair))
  }
}

/// One marker located in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMarker {
  pub kind: MarkerKind,
  /// Byte region between the begin sentinel line and the end sentinel
  /// line. Generation replaces exactly these bytes and nothing else.
  pub region: Range<usize>,
  /// Leading whitespace of the begin sentinel line, reused to indent
  /// generated lines so they sit flush with the surrounding template.
  pub indent: String,
}

/// Locate every marker of `set` in `template`. Pure; exact literal match,
/// no pattern syntax. Result is ordered by ascending region start.
pub fn resolve_markers(
  template: &str,
  set: &MarkerSet,
) -> Result<Vec<ResolvedMarker>, GenerateError> {
  // Outer span (begin sentinel line through end sentinel line) per marker,
  // kept for the overlap check; the region only covers the replaceable part.
  let mut resolved: Vec<(Range<usize>, ResolvedMarker)> = Vec::new();

  for (kind, pair) in set.iter() {
    let begin = find_once(template, kind, &pair.begin)?;
    let end = find_once(template, kind, &pair.end)?;

    // Generated region: from the line after the begin sentinel up to the
    // start of the end sentinel's line. A crossed pair has no valid region.
    let content_start = line_end(template, begin + pair.begin.len());
    let content_end = line_start(template, end);
    if end < begin || content_end < content_start {
      return Err(GenerateError::OverlappingMarkers { first: kind, second: kind });
    }

    let outer = line_start(template, begin)..line_end(template, end + pair.end.len());
    let indent = leading_indent(template, begin);
    resolved.push((outer, ResolvedMarker { kind, region: content_start..content_end, indent }));
  }

  resolved.sort_by_key(|(outer, _)| outer.start);

  // Interleaved pairs (imports begin, routes begin, imports end, ...)
  // surface here as intersecting outer spans.
  for pair in resolved.windows(2) {
    let (first, second) = (&pair[0], &pair[1]);
    if second.0.start < first.0.end {
      return Err(GenerateError::OverlappingMarkers { first: first.1.kind, second: second.1.kind });
    }
  }

  Ok(resolved.into_iter().map(|(_, marker)| marker).collect())
}

fn find_once(template: &str, kind: MarkerKind, token: &str) -> Result<usize, GenerateError> {
  let mut matches = template.match_indices(token);
  match (matches.next(), matches.next()) {
    (Some((pos, _)), None) => Ok(pos),
    (Some(_), Some(_)) => Err(GenerateError::DuplicateMarker {
      kind,
      token: token.to_string(),
      count: template.matches(token).count(),
    }),
    (None, _) => Err(GenerateError::MarkerNotFound { kind, token: token.to_string() }),
  }
}

/// Byte offset just past the newline that terminates the line containing
/// `from` (or the end of the string for the last line).
fn line_end(s: &str, from: usize) -> usize {
  s[from..].find('\n').map_or(s.len(), |i| from + i + 1)
}

/// Byte offset of the first character of the line containing `pos`.
fn line_start(s: &str, pos: usize) -> usize {
  s[..pos].rfind('\n').map_or(0, |i| i + 1)
}

fn leading_indent(s: &str, pos: usize) -> String {
  let start = line_start(s, pos);
  s[start..pos].chars().take_while(|c| *c == ' ' || *c == '\t').collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  const TEMPLATE: &str = "\
import { createRouter } from 'vue-router'

// {{ROUTE_IMPORTS}}
// {{/ROUTE_IMPORTS}}

const routes = [
  { path: '/', redirect: '/dashboard' },
  // {{ROUTES}}
  // {{/ROUTES}}
]
";

  #[test]
  fn resolves_both_default_markers_in_order() {
    let markers = resolve_markers(TEMPLATE, &MarkerSet::default()).unwrap();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].kind, MarkerKind::Imports);
    assert_eq!(markers[1].kind, MarkerKind::Routes);
    assert!(markers[0].region.end <= markers[1].region.start);
  }

  #[test]
  fn empty_region_between_adjacent_sentinel_lines() {
    let markers = resolve_markers(TEMPLATE, &MarkerSet::default()).unwrap();
    for marker in &markers {
      assert_eq!(marker.region.start, marker.region.end);
    }
  }

  #[test]
  fn region_covers_previously_generated_lines() {
    let template = "\
// {{ROUTE_IMPORTS}}
import AboutPage from './pages/About'
// {{/ROUTE_IMPORTS}}

const routes = [
  // {{ROUTES}}
  // {{/ROUTES}}
]
";
    let markers = resolve_markers(template, &MarkerSet::default()).unwrap();
    let imports = &markers[0];
    assert_eq!(&template[imports.region.clone()], "import AboutPage from './pages/About'\n");
  }

  #[test]
  fn captures_sentinel_line_indentation() {
    let markers = resolve_markers(TEMPLATE, &MarkerSet::default()).unwrap();
    assert_eq!(markers[0].indent, "");
    assert_eq!(markers[1].indent, "  ");
  }

  #[test]
  fn missing_routes_marker() {
    let template = "// {{ROUTE_IMPORTS}}\n// {{/ROUTE_IMPORTS}}\n";
    let err = resolve_markers(template, &MarkerSet::default()).unwrap_err();
    assert!(matches!(err, GenerateError::MarkerNotFound { kind: MarkerKind::Routes, .. }));
  }

  #[test]
  fn duplicated_begin_sentinel() {
    let template = "\
// {{ROUTE_IMPORTS}}
// {{/ROUTE_IMPORTS}}
// {{ROUTE_IMPORTS}}
// {{ROUTES}}
// {{/ROUTES}}
";
    let err = resolve_markers(template, &MarkerSet::default()).unwrap_err();
    assert_eq!(
      err,
      GenerateError::DuplicateMarker {
        kind: MarkerKind::Imports,
        token: "{{ROUTE_IMPORTS}}".to_string(),
        count: 2,
      }
    );
  }

  #[test]
  fn crossed_pair_is_overlapping() {
    let template = "\
// {{/ROUTE_IMPORTS}}
// {{ROUTE_IMPORTS}}
// {{ROUTES}}
// {{/ROUTES}}
";
    let err = resolve_markers(template, &MarkerSet::default()).unwrap_err();
    assert!(matches!(err, GenerateError::OverlappingMarkers { .. }));
  }

  #[test]
  fn interleaved_pairs_are_overlapping() {
    let template = "\
// {{ROUTE_IMPORTS}}
// {{ROUTES}}
// {{/ROUTE_IMPORTS}}
// {{/ROUTES}}
";
    let err = resolve_markers(template, &MarkerSet::default()).unwrap_err();
    assert!(matches!(err, GenerateError::OverlappingMarkers { .. }));
  }

  #[test]
  fn custom_sentinel_text() {
    let mut set = MarkerSet::default();
    set.set_sentinels(MarkerKind::Imports, "<imports>", "</imports>");
    set.set_sentinels(MarkerKind::Routes, "<routes>", "</routes>");
    let template = "\
# <imports>
# </imports>
# <routes>
# </routes>
";
    let markers = resolve_markers(template, &set).unwrap();
    assert_eq!(markers.len(), 2);
  }

  #[test]
  fn begin_token_inside_identifier_still_exact_literal() {
    // The literal match is exact; surrounding text does not confuse it,
    // and a second occurrence embedded anywhere counts as a duplicate.
    let template = "\
const x = \"{{ROUTE_IMPORTS}}\"
// {{ROUTE_IMPORTS}}
// {{/ROUTE_IMPORTS}}
// {{ROUTES}}
// {{/ROUTES}}
";
    let err = resolve_markers(template, &MarkerSet::default()).unwrap_err();
    assert!(matches!(err, GenerateError::DuplicateMarker { kind: MarkerKind::Imports, .. }));
  }
}
