//! Namespace key extraction: split graph subjects into record-key -> term
//! mappings under a configured prefix.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

use crate::model::{Graph, Term};

use super::error::GenerationError;
use super::format::clean_chars;

/// What to do when two distinct terms map to the same record key.
///
/// The original generator quietly kept the first mapping and warned; a
/// stricter pipeline may prefer to abort instead, so the choice is left to
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Keep the first-seen mapping and log a warning naming both terms.
    #[default]
    WarnAndContinue,
    /// Abort generation on the first conflicting key.
    FailFast,
}

/// Map every IRI subject under `prefix` to its record key: the identifier
/// remainder after the prefix, with illegal identifier characters cleaned.
///
/// Keys keep first-seen insertion order; sorting happens later in the
/// symbol table builder. Cleaning can collapse distinct identifiers (for
/// example `a.b` and `a_b`) onto one key, which is the conflict the policy
/// arbitrates.
pub fn split_keys(
    graph: &Graph,
    prefix: &str,
    policy: ConflictPolicy,
) -> Result<IndexMap<String, Term>, GenerationError> {
    let mut keys: IndexMap<String, Term> = IndexMap::new();

    for subject in graph.subjects() {
        let Some(term) = subject.as_iri() else {
            continue;
        };
        let Some(remainder) = term.as_str().strip_prefix(prefix) else {
            continue;
        };
        if remainder.is_empty() {
            continue;
        }

        let key = clean_chars(remainder);
        if key.is_empty() {
            warn!(uri = term.as_str(), "identifier cleans to an empty key, skipping");
            continue;
        }
        match keys.get(&key) {
            None => {
                keys.insert(key, term.clone());
            }
            Some(existing) if existing == term => {}
            Some(existing) => match policy {
                ConflictPolicy::WarnAndContinue => {
                    warn!(
                        uri = term.as_str(),
                        key = key.as_str(),
                        existing = existing.as_str(),
                        "conflicting keys found"
                    );
                }
                ConflictPolicy::FailFast => {
                    return Err(GenerationError::KeyConflict {
                        key,
                        kept: existing.as_str().to_string(),
                        discarded: term.as_str().to_string(),
                    });
                }
            },
        }
    }

    Ok(keys)
}
