/* src/codegen/src/error.rs */

use thiserror::Error;

use crate::marker::MarkerKind;

/// Everything that can go wrong during a generation run. All variants are
/// deterministic structural defects in the template or manifest, so there
/// is nothing to retry: the caller reports the message and aborts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
  /// A required sentinel literal is absent from the template.
  #[error("template marker {kind}: literal \"{token}\" not found")]
  MarkerNotFound { kind: MarkerKind, token: String },

  /// A sentinel literal appears more than once, usually the residue of a
  /// prior malformed generation. Never silently picks the first occurrence.
  #[error("template marker {kind}: literal \"{token}\" appears {count} times, expected exactly one")]
  DuplicateMarker { kind: MarkerKind, token: String, count: usize },

  /// Two marker regions intersect, or a begin/end pair is crossed.
  #[error("template markers {first} and {second} overlap")]
  OverlappingMarkers { first: MarkerKind, second: MarkerKind },

  /// Duplicate path/component name, invalid identifier, or a path that
  /// collides with the static fallback route. Raised before any rendering.
  #[error("manifest entry {index}: {reason}")]
  ManifestIntegrity { index: usize, reason: String },

  /// Entry text that cannot be embedded in the generated module.
  #[error("manifest entry {index} cannot be embedded in the output: {reason}")]
  Encoding { index: usize, reason: String },
}
