//! Compilation unit data model and the rendering seam.
//!
//! Generation assembles a [`CompilationUnit`]; how it becomes text is the
//! renderer's business. Renderers receive the fixed, ordered model and
//! nothing else, which keeps the data-shaping core independent of any
//! particular output language.

pub mod java;
pub mod properties;
pub mod rust;

use crate::generator::records::SchemaRecord;

/// Everything a renderer needs to produce one compilation unit.
#[derive(Debug)]
pub struct CompilationUnit {
    /// UpperCamel type/module name derived from the display name.
    pub type_name: String,
    /// The display name of the namespace.
    pub name: String,
    /// The namespace IRI (the configured prefix).
    pub namespace: String,
    /// Optional package/module path for the unit header.
    pub package: Option<String>,
    /// Indentation unit.
    pub indent: String,
    /// Title resolved for the namespace term itself.
    pub title: Option<String>,
    /// Description resolved for the namespace term itself.
    pub description: Option<String>,
    /// `rdfs:seeAlso` IRIs of the namespace term.
    pub see_also: Vec<String>,
    /// Ordered records, all kinds interleaved in emission order.
    pub records: Vec<SchemaRecord>,
}

impl CompilationUnit {
    /// The lowercase prefix label constant value.
    pub fn prefix_label(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Renders a [`CompilationUnit`] into one textual artifact.
pub trait UnitRenderer {
    fn render(&mut self, unit: &CompilationUnit) -> std::io::Result<()>;
}

/// Greedy word-wrap used for doc text; whitespace runs collapse to single
/// spaces before wrapping.
pub(crate) fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
