/* src/codegen/src/routes.rs */

// Renders manifest entries into the two text blocks the template markers
// receive: import statements and route object literals. Pure functions of
// the manifest and indentation; identical input yields identical output.

use crate::manifest::PageManifest;

/// One `import Name from 'module'` line per entry, in manifest order.
/// Empty manifest renders an empty block.
pub fn render_import_block(manifest: &PageManifest, indent: &str) -> String {
  let mut out = String::new();
  for entry in manifest.iter() {
    out.push_str(indent);
    out.push_str(&format!(
      "import {} from '{}'\n",
      entry.component_name, entry.component_module_path
    ));
  }
  out
}

/// One route object literal per entry, in manifest order, each line
/// comma-terminated to match the fallback entry above the marker.
pub fn render_route_block(manifest: &PageManifest, indent: &str) -> String {
  let mut out = String::new();
  for entry in manifest.iter() {
    out.push_str(indent);
    out.push_str(&format!("{{ path: '{}', component: {} }},\n", entry.path, entry.component_name));
  }
  out
}
