//! Per-language resource bundle derivation.
//!
//! Unlike the literal resolver, which picks exactly one literal per term,
//! bundle generation fans out to one bundle per language tag observed in
//! the graph. The untagged default bundle is seeded by untagged literals
//! and back-filled from the preferred-language bundle afterwards.

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::model::vocabulary::{COMMENT_PROPERTIES, LABEL_PROPERTIES};
use crate::model::Term;
use crate::model::Graph;

use super::error::GenerationError;
use super::format::format_key;
use super::keys::split_keys;
use super::literals::collapse_whitespace;
use super::GeneratorOptions;

/// A flat key -> text property map, insertion-ordered.
pub type Bundle = IndexMap<String, String>;

/// Derive every resource bundle for the graph: the default bundle plus one
/// per distinct language tag found under the label/comment predicates.
///
/// Bundle keys are `<formatted key>.label` / `<formatted key>.comment`; the
/// first literal per predicate category wins, later predicates in the
/// priority list never override an already-set key.
pub fn build_bundles(
    graph: &Graph,
    prefix: &str,
    base_name: &str,
    options: &GeneratorOptions,
) -> Result<IndexMap<String, Bundle>, GenerationError> {
    let keys = split_keys(graph, prefix, options.conflict_policy)?;

    let mut sorted: Vec<(&String, &Term)> = keys.iter().collect();
    sorted.sort_by_key(|(key, _)| key.to_lowercase());

    let reserved = options.target.reserved_words();

    let mut bundles: IndexMap<String, Bundle> = IndexMap::new();
    // The default bundle always exists, even when empty.
    bundles.insert(base_name.to_string(), Bundle::new());

    for &(key, term) in &sorted {
        let record_key = format_key(key, options.constant_case, reserved);
        collect_category(
            graph,
            term,
            LABEL_PROPERTIES,
            &format!("{record_key}.label"),
            base_name,
            &mut bundles,
        );
        collect_category(
            graph,
            term,
            COMMENT_PROPERTIES,
            &format!("{record_key}.comment"),
            base_name,
            &mut bundles,
        );
    }

    if let Some(language) = options.preferred_language.as_deref() {
        complete_default_bundle(&mut bundles, base_name, language);
    }

    Ok(bundles)
}

/// Insert every literal found under `predicates` into the bundle matching
/// its language tag, first write per bundle key wins.
fn collect_category(
    graph: &Graph,
    term: &Term,
    predicates: &[&str],
    bundle_key: &str,
    base_name: &str,
    bundles: &mut IndexMap<String, Bundle>,
) {
    for predicate in predicates {
        let predicate = Term::new(*predicate);
        for object in graph.objects(term, &predicate) {
            let Some(literal) = object.as_literal() else {
                continue;
            };
            let bundle_name = match literal.language() {
                None => base_name.to_string(),
                Some(lang) => format!("{base_name}_{lang}"),
            };
            let bundle = bundles.entry(bundle_name).or_default();
            if !bundle.contains_key(bundle_key) {
                bundle.insert(
                    bundle_key.to_string(),
                    collapse_whitespace(literal.value()),
                );
            }
        }
    }
}

/// Copy keys present in the preferred-language bundle but missing from the
/// default bundle. Existing default entries are never overwritten, which
/// makes repeated completion a no-op.
fn complete_default_bundle(
    bundles: &mut IndexMap<String, Bundle>,
    base_name: &str,
    language: &str,
) {
    debug!(language, "completing default bundle with preferred language");
    let preferred_name = format!("{base_name}_{language}");
    let Some(preferred) = bundles.get(&preferred_name).cloned() else {
        warn!(language, "no bundle data found for preferred language");
        return;
    };
    let Some(default) = bundles.get_mut(base_name) else {
        return;
    };
    for (key, value) in preferred {
        if !default.contains_key(&key) {
            trace!(key = key.as_str(), language, "copying entry to default bundle");
            default.insert(key, value);
        }
    }
}
