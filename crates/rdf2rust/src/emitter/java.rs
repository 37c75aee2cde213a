//! Java renderer: the original target language of the schema generator.
//!
//! Emits an RDF4J-style constants class: `NAMESPACE`/`PREFIX` String
//! constants, documented String and local-name constants, `IRI` constant
//! declarations and a static initializer constructing each IRI.

use std::io::{self, Write};

use crate::generator::literals::collapse_whitespace;
use crate::generator::records::{RecordKind, SchemaRecord};

use super::{wrap_words, CompilationUnit, UnitRenderer};

const DOC_WRAP: usize = 70;

pub struct JavaRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JavaRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record_javadoc(
        &mut self,
        unit: &CompilationUnit,
        record: &SchemaRecord,
    ) -> io::Result<()> {
        let indent = &unit.indent;
        writeln!(self.writer, "{indent}/**")?;
        if let Some(label) = &record.label {
            writeln!(self.writer, "{indent} * {}", label.value())?;
            writeln!(self.writer, "{indent} * <p>")?;
        }
        writeln!(self.writer, "{indent} * {{@code {}}}.", record.term)?;
        if let Some(description) = &record.description {
            writeln!(self.writer, "{indent} * <p>")?;
            let wrapped = wrap_words(&collapse_whitespace(description.value()), DOC_WRAP);
            for (i, line) in wrapped.iter().enumerate() {
                if i == 0 {
                    writeln!(self.writer, "{indent} * {line}")?;
                } else {
                    writeln!(self.writer, "{indent} *   {line}")?;
                }
            }
        }
        writeln!(self.writer, "{indent} *")?;
        writeln!(
            self.writer,
            "{indent} * @see <a href=\"{}\">{}</a>",
            record.term, record.raw_key
        )?;
        writeln!(self.writer, "{indent} */")
    }
}

impl<W: Write> UnitRenderer for JavaRenderer<W> {
    fn render(&mut self, unit: &CompilationUnit) -> io::Result<()> {
        let indent = &unit.indent;
        let type_name = &unit.type_name;

        if let Some(package) = &unit.package {
            writeln!(self.writer, "package {package};")?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "import org.eclipse.rdf4j.model.IRI;")?;
        writeln!(self.writer, "import org.eclipse.rdf4j.model.ValueFactory;")?;
        writeln!(
            self.writer,
            "import org.eclipse.rdf4j.model.impl.SimpleValueFactory;"
        )?;
        writeln!(self.writer)?;

        // Class javadoc.
        writeln!(self.writer, "/**")?;
        if let Some(title) = &unit.title {
            for line in wrap_words(&collapse_whitespace(title), DOC_WRAP) {
                writeln!(self.writer, " * {line}")?;
            }
            writeln!(self.writer, " * <p>")?;
        }
        if let Some(description) = &unit.description {
            for line in wrap_words(&collapse_whitespace(description), DOC_WRAP) {
                writeln!(self.writer, " * {line}")?;
            }
            writeln!(self.writer, " * <p>")?;
        }
        writeln!(self.writer, " * Namespace {}.", unit.name)?;
        writeln!(self.writer, " * Prefix: {{@code <{}>}}", unit.namespace)?;
        if !unit.see_also.is_empty() {
            writeln!(self.writer, " *")?;
            for iri in &unit.see_also {
                writeln!(self.writer, " * @see <a href=\"{iri}\">{iri}</a>")?;
            }
        }
        writeln!(self.writer, " */")?;

        writeln!(self.writer, "public class {type_name} {{")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{indent}/** {{@code {}}} **/", unit.namespace)?;
        writeln!(
            self.writer,
            "{indent}public static final String NAMESPACE = \"{}\";",
            unit.namespace
        )?;
        writeln!(self.writer)?;
        let prefix_label = unit.prefix_label();
        writeln!(self.writer, "{indent}/** {{@code {prefix_label}}} **/")?;
        writeln!(
            self.writer,
            "{indent}public static final String PREFIX = \"{prefix_label}\";",
        )?;
        writeln!(self.writer)?;

        for record in &unit.records {
            self.record_javadoc(unit, record)?;
            match &record.kind {
                RecordKind::StringConstant => {
                    writeln!(
                        self.writer,
                        "{indent}public static final String {} = {type_name}.NAMESPACE + \"{}\";",
                        record.formatted_key, record.raw_key
                    )?;
                }
                RecordKind::LocalName { local_name } => {
                    writeln!(
                        self.writer,
                        "{indent}public static final String {} = \"{local_name}\";",
                        record.formatted_key
                    )?;
                }
                RecordKind::FullTerm => {
                    writeln!(
                        self.writer,
                        "{indent}public static final IRI {};",
                        record.formatted_key
                    )?;
                }
            }
            writeln!(self.writer)?;
        }

        // Static initialization for the full-term constants.
        writeln!(self.writer, "{indent}static {{")?;
        writeln!(
            self.writer,
            "{indent}{indent}ValueFactory factory = SimpleValueFactory.getInstance();"
        )?;
        writeln!(self.writer)?;
        for record in &unit.records {
            if record.kind == RecordKind::FullTerm {
                writeln!(
                    self.writer,
                    "{indent}{indent}{} = factory.createIRI({type_name}.NAMESPACE, \"{}\");",
                    record.formatted_key, record.raw_key
                )?;
            }
        }
        writeln!(self.writer, "{indent}}}")?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{indent}private {type_name}() {{")?;
        writeln!(self.writer, "{indent}{indent}//static access only")?;
        writeln!(self.writer, "{indent}}}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "}}")?;
        self.writer.flush()
    }
}
