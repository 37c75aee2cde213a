//! Rust renderer: emits the symbol table as a Rust module.
//!
//! String and local-name constants become `pub const &str` items; full-term
//! constants become `pub static ... LazyLock<Term>` bindings so each term is
//! constructed freshly on first use, the Rust rendition of the original's
//! static initializer block.

use std::io::{self, Write};

use crate::generator::literals::collapse_whitespace;
use crate::generator::records::{RecordKind, SchemaRecord};

use super::{wrap_words, CompilationUnit, UnitRenderer};

const DOC_WRAP: usize = 76;

pub struct RustRenderer<W: Write> {
    writer: W,
}

impl<W: Write> RustRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record_docs(&mut self, record: &SchemaRecord) -> io::Result<()> {
        if let Some(label) = &record.label {
            writeln!(self.writer, "/// {}", label.value())?;
            writeln!(self.writer, "///")?;
        }
        writeln!(self.writer, "/// `{}`.", record.term)?;
        if let Some(description) = &record.description {
            writeln!(self.writer, "///")?;
            for line in wrap_words(&collapse_whitespace(description.value()), DOC_WRAP) {
                writeln!(self.writer, "/// {line}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> UnitRenderer for RustRenderer<W> {
    fn render(&mut self, unit: &CompilationUnit) -> io::Result<()> {
        if let Some(title) = &unit.title {
            for line in wrap_words(&collapse_whitespace(title), DOC_WRAP) {
                writeln!(self.writer, "//! {line}")?;
            }
            writeln!(self.writer, "//!")?;
        }
        if let Some(description) = &unit.description {
            for line in wrap_words(&collapse_whitespace(description), DOC_WRAP) {
                writeln!(self.writer, "//! {line}")?;
            }
            writeln!(self.writer, "//!")?;
        }
        writeln!(self.writer, "//! Namespace {}.", unit.name)?;
        writeln!(self.writer, "//! Prefix: `<{}>`", unit.namespace)?;
        if !unit.see_also.is_empty() {
            writeln!(self.writer, "//!")?;
            for iri in &unit.see_also {
                writeln!(self.writer, "//! See also: <{iri}>")?;
            }
        }
        if let Some(package) = &unit.package {
            writeln!(self.writer, "//!")?;
            writeln!(self.writer, "//! Module path: `{package}`.")?;
        }
        writeln!(self.writer)?;

        let has_full_terms = unit
            .records
            .iter()
            .any(|r| r.kind == RecordKind::FullTerm);
        if has_full_terms {
            writeln!(self.writer, "use std::sync::LazyLock;")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "use rdf2rust::model::Term;")?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "/// `{}`", unit.namespace)?;
        writeln!(
            self.writer,
            "pub const NAMESPACE: &str = \"{}\";",
            unit.namespace
        )?;
        writeln!(self.writer)?;
        let prefix_label = unit.prefix_label();
        writeln!(self.writer, "/// `{prefix_label}`")?;
        writeln!(
            self.writer,
            "pub const PREFIX: &str = \"{prefix_label}\";"
        )?;
        writeln!(self.writer)?;

        for record in &unit.records {
            self.record_docs(record)?;
            match &record.kind {
                RecordKind::StringConstant => {
                    writeln!(
                        self.writer,
                        "pub const {}: &str = \"{}\";",
                        record.formatted_key, record.term
                    )?;
                }
                RecordKind::LocalName { local_name } => {
                    writeln!(
                        self.writer,
                        "pub const {}: &str = \"{local_name}\";",
                        record.formatted_key
                    )?;
                }
                RecordKind::FullTerm => {
                    writeln!(
                        self.writer,
                        "pub static {}: LazyLock<Term> =\n{}LazyLock::new(|| Term::new(\"{}\"));",
                        record.formatted_key, unit.indent, record.term
                    )?;
                }
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }
}
