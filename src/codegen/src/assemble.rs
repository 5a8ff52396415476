/* src/codegen/src/assemble.rs */

// Splices rendered blocks into resolved marker regions. Everything
// outside the regions, sentinel lines included, is copied verbatim so a
// later generation run can re-resolve the markers in its own output.

use std::collections::BTreeMap;

use crate::marker::{MarkerKind, ResolvedMarker};

/// `markers` must be ordered by ascending region start and free of
/// overlaps, which is what `resolve_markers` returns. A marker without a
/// rendered block keeps an empty region.
pub fn assemble(
  template: &str,
  markers: &[ResolvedMarker],
  blocks: &BTreeMap<MarkerKind, String>,
) -> String {
  let extra: usize = blocks.values().map(String::len).sum();
  let mut out = String::with_capacity(template.len() + extra);

  let mut cursor = 0;
  for marker in markers {
    out.push_str(&template[cursor..marker.region.start]);
    if let Some(block) = blocks.get(&marker.kind) {
      out.push_str(block);
    }
    cursor = marker.region.end;
  }
  out.push_str(&template[cursor..]);
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::marker::{MarkerSet, resolve_markers};

  #[test]
  fn splices_blocks_and_preserves_everything_else() {
    let template = "\
head
// {{ROUTE_IMPORTS}}
// {{/ROUTE_IMPORTS}}
middle
  // {{ROUTES}}
  // {{/ROUTES}}
tail
";
    let markers = resolve_markers(template, &MarkerSet::default()).unwrap();
    let mut blocks = BTreeMap::new();
    blocks.insert(MarkerKind::Imports, "IMPORTS\n".to_string());
    blocks.insert(MarkerKind::Routes, "  ROUTES\n".to_string());

    let out = assemble(template, &markers, &blocks);
    assert_eq!(
      out,
      "\
head
// {{ROUTE_IMPORTS}}
IMPORTS
// {{/ROUTE_IMPORTS}}
middle
  // {{ROUTES}}
  ROUTES
  // {{/ROUTES}}
tail
"
    );
  }

  #[test]
  fn replaces_stale_generated_content() {
    let template = "\
// {{ROUTE_IMPORTS}}
import Old from './pages/Old'
// {{/ROUTE_IMPORTS}}
// {{ROUTES}}
// {{/ROUTES}}
";
    let markers = resolve_markers(template, &MarkerSet::default()).unwrap();
    let mut blocks = BTreeMap::new();
    blocks.insert(MarkerKind::Imports, "import New from './pages/New'\n".to_string());
    blocks.insert(MarkerKind::Routes, String::new());

    let out = assemble(template, &markers, &blocks);
    assert!(out.contains("import New from './pages/New'"));
    assert!(!out.contains("Old"));
  }

  #[test]
  fn empty_blocks_leave_template_unchanged() {
    let template = "\
// {{ROUTE_IMPORTS}}
// {{/ROUTE_IMPORTS}}
// {{ROUTES}}
// {{/ROUTES}}
";
    let markers = resolve_markers(template, &MarkerSet::default()).unwrap();
    let out = assemble(template, &markers, &BTreeMap::new());
    assert_eq!(out, template);
  }
}
