use rdf2rust::model::ntriples::{parse, LoadError};
use rdf2rust::model::{Literal, Resource, Term, Value};

#[test]
fn parses_iri_triple() {
    let graph = parse("<http://ex.com/s> <http://ex.com/p> <http://ex.com/o> .\n").unwrap();
    assert_eq!(graph.len(), 1);
    let triples: Vec<_> = graph.filter(None, None, None).collect();
    assert_eq!(triples[0].subject, Resource::Iri(Term::new("http://ex.com/s")));
    assert_eq!(triples[0].predicate, Term::new("http://ex.com/p"));
    assert_eq!(triples[0].object, Value::Iri(Term::new("http://ex.com/o")));
}

#[test]
fn skips_comments_and_blank_lines() {
    let doc = "# header comment\n\n<http://ex.com/s> <http://ex.com/p> \"x\" .\n";
    let graph = parse(doc).unwrap();
    assert_eq!(graph.len(), 1);
}

#[test]
fn parses_plain_literal() {
    let graph = parse("<http://ex.com/s> <http://ex.com/p> \"hello world\" .").unwrap();
    let triples: Vec<_> = graph.filter(None, None, None).collect();
    assert_eq!(triples[0].object, Value::Literal(Literal::new("hello world")));
}

#[test]
fn parses_language_tagged_literal() {
    let graph = parse("<http://ex.com/s> <http://ex.com/p> \"bonjour\"@fr .").unwrap();
    let triples: Vec<_> = graph.filter(None, None, None).collect();
    assert_eq!(
        triples[0].object,
        Value::Literal(Literal::with_language("bonjour", "fr"))
    );
}

#[test]
fn datatype_is_discarded() {
    let doc = "<http://ex.com/s> <http://ex.com/p> \"42\"^^<http://www.w3.org/2001/XMLSchema#integer> .";
    let graph = parse(doc).unwrap();
    let triples: Vec<_> = graph.filter(None, None, None).collect();
    assert_eq!(triples[0].object, Value::Literal(Literal::new("42")));
}

#[test]
fn decodes_escapes() {
    let doc = r#"<http://ex.com/s> <http://ex.com/p> "line\none\ttab \"q\" é\U0001F600" ."#;
    let graph = parse(doc).unwrap();
    let triples: Vec<_> = graph.filter(None, None, None).collect();
    assert_eq!(
        triples[0].object,
        Value::Literal(Literal::new("line\none\ttab \"q\" \u{e9}\u{1F600}"))
    );
}

#[test]
fn parses_blank_nodes() {
    let graph = parse("_:b0 <http://ex.com/p> _:b1 .").unwrap();
    let triples: Vec<_> = graph.filter(None, None, None).collect();
    assert_eq!(triples[0].subject, Resource::Blank("b0".to_string()));
    assert_eq!(triples[0].object, Value::Blank("b1".to_string()));
}

#[test]
fn syntax_error_reports_line_number() {
    let doc = "<http://ex.com/s> <http://ex.com/p> \"ok\" .\nnot a triple\n";
    match parse(doc) {
        Err(LoadError::Syntax { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected syntax error, got: {other:?}"),
    }
}

#[test]
fn unterminated_literal_is_an_error() {
    assert!(matches!(
        parse("<http://ex.com/s> <http://ex.com/p> \"open ."),
        Err(LoadError::Syntax { .. })
    ));
}

#[test]
fn missing_trailing_dot_is_an_error() {
    assert!(matches!(
        parse("<http://ex.com/s> <http://ex.com/p> \"x\""),
        Err(LoadError::Syntax { line: 1, .. })
    ));
}
