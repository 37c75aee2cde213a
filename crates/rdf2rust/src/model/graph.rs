//! Read-only statement graph backing a generation run.
//!
//! The generator only ever needs two views of the input: every subject in
//! insertion order, and the objects found under a (subject, predicate) pair.
//! Both are served from a flat, append-only triple list.

use std::collections::HashSet;
use std::fmt;

/// An IRI-identified node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term(String);

impl Term {
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Construct a term by concatenating a namespace and a local part.
    pub fn join(namespace: &str, local: &str) -> Self {
        Self(format!("{namespace}{local}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the local name per IRI syntax: the fragment after `#`, else
    /// the segment after the last `/`, else the part after the last `:`.
    /// Returns `None` when no delimiter exists or the remainder is empty.
    pub fn local_name(&self) -> Option<&str> {
        let iri = self.0.as_str();
        let idx = iri
            .find('#')
            .or_else(|| iri.rfind('/'))
            .or_else(|| iri.rfind(':'))?;
        let local = &iri[idx + 1..];
        if local.is_empty() {
            None
        } else {
            Some(local)
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A text value with an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    value: String,
    language: Option<String>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: None,
        }
    }

    pub fn with_language(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Subject position: an IRI or a blank node. Only IRI subjects take part
/// in schema generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Iri(Term),
    Blank(String),
}

impl Resource {
    pub fn as_iri(&self) -> Option<&Term> {
        match self {
            Resource::Iri(term) => Some(term),
            Resource::Blank(_) => None,
        }
    }
}

/// Object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Iri(Term),
    Blank(String),
    Literal(Literal),
}

impl Value {
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_iri(&self) -> Option<&Term> {
        match self {
            Value::Iri(term) => Some(term),
            _ => None,
        }
    }
}

/// One subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: Resource,
    pub predicate: Term,
    pub object: Value,
}

/// An insertion-ordered statement store. Append-only; reads are
/// side-effect-free.
#[derive(Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: Resource, predicate: Term, object: Value) {
        self.triples.push(Triple {
            subject,
            predicate,
            object,
        });
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Every distinct subject, in first-seen order.
    pub fn subjects(&self) -> impl Iterator<Item = &Resource> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(move |s| seen.insert(*s))
    }

    /// Statements matching the given pattern; `None` matches anything.
    pub fn filter<'a>(
        &'a self,
        subject: Option<&'a Resource>,
        predicate: Option<&'a Term>,
        object: Option<&'a Value>,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| {
            subject.is_none_or(|s| &t.subject == s)
                && predicate.is_none_or(|p| &t.predicate == p)
                && object.is_none_or(|o| &t.object == o)
        })
    }

    /// Objects under a (subject, predicate) pair, in insertion order.
    pub fn objects(&self, subject: &Term, predicate: &Term) -> Vec<&Value> {
        self.triples
            .iter()
            .filter(|t| t.subject.as_iri() == Some(subject) && &t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }
}
