//! Minimal N-Triples reader.
//!
//! Covers the line-oriented subset needed to feed a [`Graph`]: IRI and blank
//! node subjects, IRI predicates, IRI / blank node / literal objects with
//! optional language tags or datatypes. Datatype IRIs are accepted and
//! discarded, since generation only looks at text and language.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::graph::{Graph, Literal, Resource, Term, Value};

/// Errors raised while reading an N-Triples document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

impl LoadError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        LoadError::Syntax {
            line,
            message: message.into(),
        }
    }
}

/// Read an N-Triples file into a [`Graph`].
pub fn load_file(path: &Path) -> Result<Graph, LoadError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse N-Triples text into a [`Graph`].
pub fn parse(content: &str) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();
    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut cursor = Cursor::new(line, line_no);
        let subject = cursor.parse_subject()?;
        cursor.skip_ws();
        let predicate = cursor.parse_iri()?;
        cursor.skip_ws();
        let object = cursor.parse_object()?;
        cursor.skip_ws();
        cursor.expect('.')?;
        graph.insert(subject, predicate, object);
    }
    Ok(graph)
}

/// Character cursor over one statement line.
struct Cursor<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(line_text: &'a str, line: usize) -> Self {
        Self {
            rest: line_text,
            line,
        }
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn expect(&mut self, c: char) -> Result<(), LoadError> {
        if let Some(stripped) = self.rest.strip_prefix(c) {
            self.rest = stripped;
            Ok(())
        } else {
            Err(LoadError::syntax(
                self.line,
                format!("expected '{c}', found {:?}", self.rest),
            ))
        }
    }

    fn parse_subject(&mut self) -> Result<Resource, LoadError> {
        if self.rest.starts_with('<') {
            Ok(Resource::Iri(self.parse_iri()?))
        } else if self.rest.starts_with("_:") {
            Ok(Resource::Blank(self.parse_blank()?))
        } else {
            Err(LoadError::syntax(
                self.line,
                format!("expected IRI or blank node subject, found {:?}", self.rest),
            ))
        }
    }

    fn parse_iri(&mut self) -> Result<Term, LoadError> {
        self.expect('<')?;
        match self.rest.find('>') {
            Some(end) => {
                let iri = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                Ok(Term::new(iri))
            }
            None => Err(LoadError::syntax(self.line, "unterminated IRI")),
        }
    }

    fn parse_blank(&mut self) -> Result<String, LoadError> {
        self.rest = &self.rest["_:".len()..];
        let end = self
            .rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(self.rest.len());
        let label = &self.rest[..end];
        if label.is_empty() {
            return Err(LoadError::syntax(self.line, "empty blank node label"));
        }
        self.rest = &self.rest[end..];
        Ok(label.to_string())
    }

    fn parse_object(&mut self) -> Result<Value, LoadError> {
        if self.rest.starts_with('<') {
            Ok(Value::Iri(self.parse_iri()?))
        } else if self.rest.starts_with("_:") {
            Ok(Value::Blank(self.parse_blank()?))
        } else if self.rest.starts_with('"') {
            self.parse_literal()
        } else {
            Err(LoadError::syntax(
                self.line,
                format!("expected object term, found {:?}", self.rest),
            ))
        }
    }

    fn parse_literal(&mut self) -> Result<Value, LoadError> {
        self.expect('"')?;
        let mut value = String::new();
        let mut chars = self.rest.char_indices();
        let end;
        loop {
            let Some((i, c)) = chars.next() else {
                return Err(LoadError::syntax(self.line, "unterminated literal"));
            };
            match c {
                '"' => {
                    end = i + 1;
                    break;
                }
                '\\' => {
                    let Some((_, esc)) = chars.next() else {
                        return Err(LoadError::syntax(self.line, "dangling escape"));
                    };
                    match esc {
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        't' => value.push('\t'),
                        'u' | 'U' => {
                            let width = if esc == 'u' { 4 } else { 8 };
                            let mut code = String::with_capacity(width);
                            for _ in 0..width {
                                match chars.next() {
                                    Some((_, h)) => code.push(h),
                                    None => {
                                        return Err(LoadError::syntax(
                                            self.line,
                                            "truncated unicode escape",
                                        ))
                                    }
                                }
                            }
                            let cp = u32::from_str_radix(&code, 16).map_err(|_| {
                                LoadError::syntax(self.line, "invalid unicode escape")
                            })?;
                            match char::from_u32(cp) {
                                Some(decoded) => value.push(decoded),
                                None => {
                                    return Err(LoadError::syntax(
                                        self.line,
                                        "invalid unicode codepoint",
                                    ))
                                }
                            }
                        }
                        other => {
                            return Err(LoadError::syntax(
                                self.line,
                                format!("unknown escape '\\{other}'"),
                            ))
                        }
                    }
                }
                _ => value.push(c),
            }
        }
        self.rest = &self.rest[end..];

        // Optional language tag or datatype.
        if let Some(stripped) = self.rest.strip_prefix('@') {
            let tag_end = stripped
                .find(|c: char| c.is_whitespace())
                .unwrap_or(stripped.len());
            let lang = &stripped[..tag_end];
            if lang.is_empty() {
                return Err(LoadError::syntax(self.line, "empty language tag"));
            }
            self.rest = &stripped[tag_end..];
            Ok(Value::Literal(Literal::with_language(value, lang)))
        } else if self.rest.starts_with("^^") {
            self.rest = &self.rest["^^".len()..];
            // Datatype carried in the document but irrelevant for generation.
            let _datatype = self.parse_iri()?;
            Ok(Value::Literal(Literal::new(value)))
        } else {
            Ok(Value::Literal(Literal::new(value)))
        }
    }
}
