//! Compile RDF schema definitions into source-code constants.
//!
//! The pipeline reads a statement graph, splits its subjects into a stable,
//! collision-checked identifier namespace under a configured prefix,
//! resolves best-fit labels and descriptions per term under a language
//! preference, and emits the resulting symbol table as one compilation unit
//! (Rust or Java) plus optional per-language resource bundles.

pub mod emitter;
pub mod generator;
pub mod model;
