//! Best-fit literal resolution under a language-preference policy.

use crate::model::{Graph, Literal, Term};

/// Pick at most one literal for `subject`, trying `predicates` strictly in
/// priority order.
///
/// The first predicate that owns any literal object wins outright, even if
/// none of its literals match the preferred language; preference is applied
/// only within that predicate's candidate set. Within one predicate, a
/// literal replaces the running best when no best exists yet or when its
/// language tag equals the preferred one.
pub fn first_existing_literal<'a>(
    graph: &'a Graph,
    subject: &Term,
    preferred_lang: Option<&str>,
    predicates: &[&str],
) -> Option<&'a Literal> {
    for predicate in predicates {
        let predicate = Term::new(*predicate);
        if let Some(literal) = best_literal(graph, subject, &predicate, preferred_lang) {
            return Some(literal);
        }
    }
    None
}

/// Collapse every whitespace run to a single space, so multi-line literal
/// text lays out sanely in doc comments and property files.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

/// Scan the literal objects of one (subject, predicate) pair once, keeping
/// the best candidate.
fn best_literal<'a>(
    graph: &'a Graph,
    subject: &Term,
    predicate: &Term,
    preferred_lang: Option<&str>,
) -> Option<&'a Literal> {
    let mut best: Option<&Literal> = None;
    for object in graph.objects(subject, predicate) {
        let Some(literal) = object.as_literal() else {
            continue;
        };
        let preferred_match =
            preferred_lang.is_some() && literal.language() == preferred_lang;
        if best.is_none() || preferred_match {
            best = Some(literal);
        }
    }
    best
}
