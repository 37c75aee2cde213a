//! Schema records and the symbol table builder.
//!
//! All three record kinds share one resolve -> format -> register pipeline;
//! they differ only in which affixes apply and, for local-name constants,
//! an extra derivation step that may fail per record.

use tracing::error;

use crate::model::vocabulary::{COMMENT_PROPERTIES, LABEL_PROPERTIES};
use crate::model::{Graph, Literal, Term};

use super::error::GenerationError;
use super::format::{format_affixed_key, format_key, FieldRegistry};
use super::keys::split_keys;
use super::literals::first_existing_literal;
use super::GeneratorOptions;

/// Which constant a record turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    /// A constant bound to a freshly constructed term in static
    /// initialization.
    FullTerm,
    /// A plain string constant holding the term identifier.
    StringConstant,
    /// A string constant holding the term's derived local name.
    LocalName { local_name: String },
}

/// One unit of the symbol table: a term plus its formatted key and resolved
/// label/description. The term and formatted key are always present; the
/// formatted key is unique within one generation run.
#[derive(Debug, Clone)]
pub struct SchemaRecord {
    pub term: Term,
    pub formatted_key: String,
    pub raw_key: String,
    pub label: Option<Literal>,
    pub description: Option<Literal>,
    pub kind: RecordKind,
}

/// Build the ordered, collision-checked record list for one run.
///
/// Record keys sort case-insensitively; per enabled kind one record is built
/// per key, and every formatted key passes through a single shared
/// [`FieldRegistry`] since all kinds land in one emitted namespace.
pub fn build_symbol_table(
    graph: &Graph,
    prefix: &str,
    options: &GeneratorOptions,
) -> Result<Vec<SchemaRecord>, GenerationError> {
    let keys = split_keys(graph, prefix, options.conflict_policy)?;

    let mut sorted: Vec<(&String, &Term)> = keys.iter().collect();
    sorted.sort_by_key(|(key, _)| key.to_lowercase());

    let reserved = options.target.reserved_words();
    let mut registry = FieldRegistry::new();
    let mut records = Vec::new();

    if options.string_constants_enabled() {
        for &(key, term) in &sorted {
            let formatted = format_affixed_key(
                key,
                options.string_constant_case,
                options.string_constant_prefix.as_deref(),
                options.string_constant_suffix.as_deref(),
                reserved,
            );
            registry.register(&formatted)?;
            records.push(make_record(
                graph,
                prefix,
                term,
                formatted,
                RecordKind::StringConstant,
                options,
            ));
        }
    }

    if options.local_name_constants_enabled() {
        for &(key, term) in &sorted {
            let Some(local_name) = term.local_name() else {
                error!(
                    uri = term.as_str(),
                    key = key.as_str(),
                    "could not derive local name, skipping record"
                );
                continue;
            };
            let formatted = format_affixed_key(
                key,
                options.local_name_constant_case,
                options.local_name_constant_prefix.as_deref(),
                options.local_name_constant_suffix.as_deref(),
                reserved,
            );
            registry.register(&formatted)?;
            records.push(make_record(
                graph,
                prefix,
                term,
                formatted,
                RecordKind::LocalName {
                    local_name: local_name.to_string(),
                },
                options,
            ));
        }
    }

    for &(key, term) in &sorted {
        let formatted = format_key(key, options.constant_case, reserved);
        registry.register(&formatted)?;
        records.push(make_record(
            graph,
            prefix,
            term,
            formatted,
            RecordKind::FullTerm,
            options,
        ));
    }

    Ok(records)
}

fn make_record(
    graph: &Graph,
    prefix: &str,
    term: &Term,
    formatted_key: String,
    kind: RecordKind,
    options: &GeneratorOptions,
) -> SchemaRecord {
    let preferred = options.preferred_language.as_deref();
    let raw_key = term
        .as_str()
        .strip_prefix(prefix)
        .unwrap_or(term.as_str())
        .to_string();
    SchemaRecord {
        term: term.clone(),
        formatted_key,
        raw_key,
        label: first_existing_literal(graph, term, preferred, LABEL_PROPERTIES).cloned(),
        description: first_existing_literal(graph, term, preferred, COMMENT_PROPERTIES).cloned(),
        kind,
    }
}
