/* src/codegen/src/lib.rs */

//! Turns a crawler's page manifest into a Vue Router module by splicing
//! generated import and route blocks into a marked-up template.
//!
//! The core is a pure, synchronous transformation: callers own all I/O.
//! Reading the manifest and template, and writing the generated module,
//! happen in the CLI (or whatever embeds this crate).

pub mod assemble;
pub mod error;
pub mod manifest;
pub mod marker;
pub mod pipeline;
pub mod routes;
pub mod template;

pub use error::GenerateError;
pub use manifest::{FALLBACK_PATH, PageEntry, PageManifest};
pub use marker::{MarkerKind, MarkerSet, ResolvedMarker, SentinelPair, resolve_markers};
pub use pipeline::{GenerationOutput, GenerationPipeline, GenerationReport, PipelineStage, generate};
pub use template::{HistoryMode, default_template};
