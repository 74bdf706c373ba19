//! Evaluation of a parsed policy against a project's import map.
//!
//! This crate has no knowledge of any host language: it consumes whatever
//! `(file, imports)` data an extractor hands it and applies the prefix
//! match / allow-override / self-import rules that define a violation.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod evaluator;
mod violation;

pub use evaluator::evaluate;
pub use violation::Violation;

use indexmap::IndexMap;

/// An ordered mapping from a file's canonical module path to the ordered
/// list of modules it imports.
///
/// Iteration order matters: it determines the order violations are
/// reported in, so this is an [`IndexMap`] rather than a [`std::collections::HashMap`].
pub type ImportMap = IndexMap<String, Vec<String>>;
