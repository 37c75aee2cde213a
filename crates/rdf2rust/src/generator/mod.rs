//! Schema generation engine: turns a statement graph into an ordered symbol
//! table, a compilation unit model and per-language resource bundles.
//!
//! The [`SchemaGenerator`] drives the pipeline described in the module
//! leaves: key extraction ([`keys`]), literal resolution ([`literals`]),
//! identifier formatting ([`format`]) and record assembly ([`records`]).

pub mod bundles;
pub mod error;
pub mod format;
pub mod keys;
pub mod literals;
pub mod records;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::emitter::{CompilationUnit, UnitRenderer};
use crate::model::vocabulary::{owl, rdf, rdfs, COMMENT_PROPERTIES, LABEL_PROPERTIES};
use crate::model::{Graph, Term, Value};

pub use bundles::Bundle;
pub use error::GenerationError;
pub use format::{CaseFormat, Target};
pub use keys::ConflictPolicy;
pub use records::{RecordKind, SchemaRecord};

/// Configuration for one generation run. Deserializable so the CLI can take
/// an options file as well as flags.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorOptions {
    /// Namespace prefix demarcating schema terms. Auto-detected from an
    /// `owl:Ontology` subject when absent.
    pub prefix: Option<String>,
    /// Display name of the namespace; also seeds the unit type name.
    pub name: Option<String>,
    /// Optional package/module path for the unit header.
    pub package_name: Option<String>,
    /// Indentation unit for the emitted source. Defaults to a tab.
    pub indent: Option<String>,
    /// Preferred language tag for labels, descriptions and bundle fallback.
    pub preferred_language: Option<String>,
    /// Case format for full-term constants.
    pub constant_case: Option<CaseFormat>,
    /// Case format for string constants.
    pub string_constant_case: Option<CaseFormat>,
    pub string_constant_prefix: Option<String>,
    pub string_constant_suffix: Option<String>,
    /// Case format for local-name string constants.
    pub local_name_constant_case: Option<CaseFormat>,
    pub local_name_constant_prefix: Option<String>,
    pub local_name_constant_suffix: Option<String>,
    /// How record-key conflicts are handled.
    pub conflict_policy: ConflictPolicy,
    /// Target language; selects the reserved-word set and the renderer.
    pub target: Target,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl GeneratorOptions {
    /// String constants are produced when any of their case format, prefix
    /// or suffix is configured.
    pub fn string_constants_enabled(&self) -> bool {
        self.string_constant_case.is_some()
            || non_blank(self.string_constant_prefix.as_deref()).is_some()
            || non_blank(self.string_constant_suffix.as_deref()).is_some()
    }

    /// Same rule for local-name constants.
    pub fn local_name_constants_enabled(&self) -> bool {
        self.local_name_constant_case.is_some()
            || non_blank(self.local_name_constant_prefix.as_deref()).is_some()
            || non_blank(self.local_name_constant_suffix.as_deref()).is_some()
    }
}

/// Derive an UpperCamel type name from a display name: non-word characters
/// split words, each word is capitalized, separators are dropped.
pub fn type_name_from(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Orchestrates one generation run over an immutable graph.
pub struct SchemaGenerator<'g> {
    graph: &'g Graph,
    options: GeneratorOptions,
}

impl<'g> SchemaGenerator<'g> {
    /// Create a generator. When no prefix is configured, the first subject
    /// typed `owl:Ontology` seeds it, matching the original tool.
    pub fn new(graph: &'g Graph, mut options: GeneratorOptions) -> Self {
        if non_blank(options.prefix.as_deref()).is_none() {
            if let Some(detected) = detect_ontology_prefix(graph) {
                debug!(prefix = detected.as_str(), "detected prefix from ontology declaration");
                options.prefix = Some(detected);
            }
        }
        Self { graph, options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn prefix(&self) -> Result<&str, GenerationError> {
        non_blank(self.options.prefix.as_deref()).ok_or(GenerationError::MissingPrefix)
    }

    /// Assemble the complete, ordered data model handed to a renderer.
    pub fn build_unit(&self) -> Result<CompilationUnit, GenerationError> {
        let name = non_blank(self.options.name.as_deref()).ok_or(GenerationError::MissingName)?;
        let type_name = type_name_from(name);
        if type_name.is_empty() {
            return Err(GenerationError::MissingName);
        }
        let prefix = self.prefix()?;
        debug!(prefix, type_name = type_name.as_str(), "building compilation unit");

        let records = records::build_symbol_table(self.graph, prefix, &self.options)?;

        let prefix_term = Term::new(prefix);
        let preferred = self.options.preferred_language.as_deref();
        let title =
            literals::first_existing_literal(self.graph, &prefix_term, preferred, LABEL_PROPERTIES)
                .map(|l| l.value().to_string());
        let description = literals::first_existing_literal(
            self.graph,
            &prefix_term,
            preferred,
            COMMENT_PROPERTIES,
        )
        .map(|l| l.value().to_string());
        let see_also_pred = Term::new(rdfs::SEE_ALSO);
        let see_also: Vec<String> = self
            .graph
            .objects(&prefix_term, &see_also_pred)
            .into_iter()
            .filter_map(Value::as_iri)
            .map(|t| t.as_str().to_string())
            .collect();

        Ok(CompilationUnit {
            type_name,
            name: name.to_string(),
            namespace: prefix.to_string(),
            package: non_blank(self.options.package_name.as_deref()).map(str::to_string),
            indent: self
                .options
                .indent
                .clone()
                .unwrap_or_else(|| "\t".to_string()),
            title,
            description,
            see_also,
            records,
        })
    }

    /// Build the unit and hand it to a renderer. A failed build writes
    /// nothing.
    pub fn generate<R: UnitRenderer>(&self, renderer: &mut R) -> Result<(), GenerationError> {
        let unit = self.build_unit()?;
        renderer.render(&unit)?;
        Ok(())
    }

    /// Derive every resource bundle for the graph (§ resource bundles).
    pub fn build_bundles(
        &self,
        base_name: &str,
    ) -> Result<IndexMap<String, Bundle>, GenerationError> {
        bundles::build_bundles(self.graph, self.prefix()?, base_name, &self.options)
    }
}

/// First IRI subject declared `rdf:type owl:Ontology`, if any.
fn detect_ontology_prefix(graph: &Graph) -> Option<String> {
    let rdf_type = Term::new(rdf::TYPE);
    let ontology = Value::Iri(Term::new(owl::ONTOLOGY));
    let detected = graph
        .filter(None, Some(&rdf_type), Some(&ontology))
        .find_map(|t| t.subject.as_iri())
        .map(|t| t.as_str().to_string());
    detected
}
