use rdf2rust::emitter::java::JavaRenderer;
use rdf2rust::emitter::rust::RustRenderer;
use rdf2rust::generator::{
    type_name_from, CaseFormat, GenerationError, GeneratorOptions, RecordKind, SchemaGenerator,
};
use rdf2rust::model::vocabulary::{dcterms, owl, rdf, rdfs, skos};
use rdf2rust::model::{Graph, Literal, Resource, Term, Value};

const NS: &str = "http://example.com/ns/ontology#";

/// The test ontology used throughout: four properties, one of them with
/// localised labels in English and French.
fn test_graph() -> Graph {
    let mut graph = Graph::new();
    let iri = |s: &str| Resource::Iri(Term::new(format!("{NS}{s}")));
    graph.insert(
        Resource::Iri(Term::new(NS)),
        Term::new(rdf::TYPE),
        Value::Iri(Term::new(owl::ONTOLOGY)),
    );
    graph.insert(
        iri("property1"),
        Term::new(dcterms::DESCRIPTION),
        Value::Literal(Literal::new("property 1 description")),
    );
    graph.insert(
        iri("property_2"),
        Term::new(rdfs::COMMENT),
        Value::Literal(Literal::new("property 2 description")),
    );
    graph.insert(
        iri("property-3"),
        Term::new(skos::DEFINITION),
        Value::Literal(Literal::new("property 3 description")),
    );
    graph.insert(
        iri("propertyLocalised4"),
        Term::new(skos::PREF_LABEL),
        Value::Literal(Literal::with_language("property 4 description english", "en")),
    );
    graph.insert(
        iri("propertyLocalised4"),
        Term::new(skos::PREF_LABEL),
        Value::Literal(Literal::with_language(
            "Description de la propriété français",
            "fr",
        )),
    );
    graph
}

fn options(name: &str) -> GeneratorOptions {
    GeneratorOptions {
        name: Some(name.to_string()),
        ..GeneratorOptions::default()
    }
}

fn render_rust(graph: &Graph, options: GeneratorOptions) -> String {
    let generator = SchemaGenerator::new(graph, options);
    let mut buf = Vec::new();
    let mut renderer = RustRenderer::new(&mut buf);
    generator.generate(&mut renderer).unwrap();
    String::from_utf8(buf).unwrap()
}

fn render_java(graph: &Graph, options: GeneratorOptions) -> String {
    let generator = SchemaGenerator::new(graph, options);
    let mut buf = Vec::new();
    let mut renderer = JavaRenderer::new(&mut buf);
    generator.generate(&mut renderer).unwrap();
    String::from_utf8(buf).unwrap()
}

// ---------------------------------------------------------------------------
// Type name derivation
// ---------------------------------------------------------------------------

#[test]
fn type_name_capitalizes_words() {
    assert_eq!(type_name_from("my vocab"), "MyVocab");
    assert_eq!(type_name_from("foaf"), "Foaf");
    assert_eq!(type_name_from("Test"), "Test");
}

#[test]
fn type_name_drops_non_word_characters() {
    assert_eq!(type_name_from("schema.org/core"), "SchemaOrgCore");
}

// ---------------------------------------------------------------------------
// Prefix handling
// ---------------------------------------------------------------------------

#[test]
fn prefix_detected_from_ontology_declaration() {
    let graph = test_graph();
    let generator = SchemaGenerator::new(&graph, options("Test"));
    let unit = generator.build_unit().unwrap();
    assert_eq!(unit.namespace, NS);
}

#[test]
fn missing_prefix_is_fatal() {
    let mut graph = Graph::new();
    graph.insert(
        Resource::Iri(Term::new("http://example.com/ns/ontology#a")),
        Term::new(rdfs::LABEL),
        Value::Literal(Literal::new("a")),
    );
    let generator = SchemaGenerator::new(&graph, options("Test"));
    assert!(matches!(
        generator.build_unit(),
        Err(GenerationError::MissingPrefix)
    ));
}

#[test]
fn missing_name_is_fatal() {
    let graph = test_graph();
    let generator = SchemaGenerator::new(&graph, GeneratorOptions::default());
    assert!(matches!(
        generator.build_unit(),
        Err(GenerationError::MissingName)
    ));
}

#[test]
fn name_without_word_characters_is_fatal() {
    let graph = test_graph();
    let generator = SchemaGenerator::new(&graph, options("###"));
    assert!(matches!(
        generator.build_unit(),
        Err(GenerationError::MissingName)
    ));
}

// ---------------------------------------------------------------------------
// Symbol table shape
// ---------------------------------------------------------------------------

#[test]
fn records_sort_case_insensitively_by_key() {
    let graph = test_graph();
    let generator = SchemaGenerator::new(&graph, options("Test"));
    let unit = generator.build_unit().unwrap();
    let keys: Vec<&str> = unit
        .records
        .iter()
        .map(|r| r.formatted_key.as_str())
        .collect();
    assert_eq!(
        keys,
        ["property1", "property_2", "property_3", "propertyLocalised4"]
    );
}

#[test]
fn records_carry_resolved_descriptions() {
    let graph = test_graph();
    let generator = SchemaGenerator::new(&graph, options("Test"));
    let unit = generator.build_unit().unwrap();
    let record = unit
        .records
        .iter()
        .find(|r| r.formatted_key == "property1")
        .unwrap();
    assert_eq!(
        record.description.as_ref().map(|l| l.value()),
        Some("property 1 description")
    );
}

#[test]
fn string_constants_enabled_by_suffix() {
    let graph = test_graph();
    let mut opts = options("Test");
    opts.string_constant_suffix = Some("_STRING".to_string());
    let generator = SchemaGenerator::new(&graph, opts);
    let unit = generator.build_unit().unwrap();
    let strings: Vec<&str> = unit
        .records
        .iter()
        .filter(|r| r.kind == RecordKind::StringConstant)
        .map(|r| r.formatted_key.as_str())
        .collect();
    assert_eq!(
        strings,
        [
            "property1_STRING",
            "property_2_STRING",
            "property_3_STRING",
            "propertyLocalised4_STRING"
        ]
    );
    // Full-term constants are still present.
    assert_eq!(
        unit.records
            .iter()
            .filter(|r| r.kind == RecordKind::FullTerm)
            .count(),
        4
    );
}

#[test]
fn local_name_constants_hold_derived_local_names() {
    let graph = test_graph();
    let mut opts = options("Test");
    opts.local_name_constant_case = Some(CaseFormat::UpperSnake);
    opts.local_name_constant_suffix = Some("_LOCALNAME".to_string());
    opts.constant_case = Some(CaseFormat::LowerCamel);
    let generator = SchemaGenerator::new(&graph, opts);
    let unit = generator.build_unit().unwrap();
    let record = unit
        .records
        .iter()
        .find(|r| r.formatted_key == "PROPERTY_LOCALISED4_LOCALNAME")
        .unwrap();
    assert_eq!(
        record.kind,
        RecordKind::LocalName {
            local_name: "propertyLocalised4".to_string()
        }
    );
}

#[test]
fn underivable_local_name_skips_only_that_record() {
    let mut graph = Graph::new();
    let prefix = "http://example.com/ns/";
    // Trailing # leaves an empty fragment, so no local name derives.
    graph.insert(
        Resource::Iri(Term::new("http://example.com/ns/thing#")),
        Term::new(rdfs::LABEL),
        Value::Literal(Literal::new("thing")),
    );
    graph.insert(
        Resource::Iri(Term::new("http://example.com/ns/other")),
        Term::new(rdfs::LABEL),
        Value::Literal(Literal::new("other")),
    );
    let mut opts = options("Test");
    opts.prefix = Some(prefix.to_string());
    opts.local_name_constant_suffix = Some("_LOCALNAME".to_string());
    let generator = SchemaGenerator::new(&graph, opts);
    let unit = generator.build_unit().unwrap();
    let local_names: Vec<&str> = unit
        .records
        .iter()
        .filter(|r| matches!(r.kind, RecordKind::LocalName { .. }))
        .map(|r| r.formatted_key.as_str())
        .collect();
    assert_eq!(local_names, ["other_LOCALNAME"]);
    // Both subjects still get full-term constants.
    assert_eq!(
        unit.records
            .iter()
            .filter(|r| r.kind == RecordKind::FullTerm)
            .count(),
        2
    );
}

#[test]
fn duplicate_formatted_keys_are_fatal() {
    let mut graph = Graph::new();
    for s in ["http://example.com/ns/ontology#myKey", "http://example.com/ns/ontology#my_key"] {
        graph.insert(
            Resource::Iri(Term::new(s)),
            Term::new(rdfs::LABEL),
            Value::Literal(Literal::new("x")),
        );
    }
    let mut opts = options("Test");
    opts.prefix = Some(NS.to_string());
    opts.constant_case = Some(CaseFormat::UpperSnake);
    let generator = SchemaGenerator::new(&graph, opts);
    match generator.build_unit() {
        Err(GenerationError::DuplicateConstant(name)) => assert_eq!(name, "MY_KEY"),
        other => panic!("expected DuplicateConstant, got: {other:?}"),
    }
}

#[test]
fn conflicting_record_keys_emit_one_record() {
    // Scenario: a.b and a_b clean to the same record key; the first-seen
    // term is retained and exactly one record is emitted.
    let mut graph = Graph::new();
    for s in ["http://example.com/ns/ontology#a.b", "http://example.com/ns/ontology#a_b"] {
        graph.insert(
            Resource::Iri(Term::new(s)),
            Term::new(rdfs::LABEL),
            Value::Literal(Literal::new("x")),
        );
    }
    let mut opts = options("Test");
    opts.prefix = Some(NS.to_string());
    let generator = SchemaGenerator::new(&graph, opts);
    let unit = generator.build_unit().unwrap();
    assert_eq!(unit.records.len(), 1);
    assert_eq!(unit.records[0].formatted_key, "a_b");
    assert_eq!(
        unit.records[0].term.as_str(),
        "http://example.com/ns/ontology#a.b"
    );
}

// ---------------------------------------------------------------------------
// Rust rendering
// ---------------------------------------------------------------------------

#[test]
fn rust_unit_contains_namespace_and_prefix_constants() {
    let out = render_rust(&test_graph(), options("Test"));
    assert!(out.contains(&format!("pub const NAMESPACE: &str = \"{NS}\";")));
    assert!(out.contains("pub const PREFIX: &str = \"test\";"));
}

#[test]
fn rust_unit_preferred_language_label_wins() {
    let mut opts = options("Test");
    opts.preferred_language = Some("fr".to_string());
    let out = render_rust(&test_graph(), opts);
    assert!(out.contains("Description de la propriété français"));
    assert!(!out.contains("property 4 description english"));
}

#[test]
fn rust_unit_upper_snake_keeps_original_identifier() {
    let mut opts = options("Test");
    opts.constant_case = Some(CaseFormat::UpperSnake);
    let out = render_rust(&test_graph(), opts);
    assert!(out.contains("PROPERTY_LOCALISED4"));
    assert!(out.contains("\"http://example.com/ns/ontology#propertyLocalised4\""));
    assert!(out.contains("PROPERTY_2"));
    assert!(out.contains("\"http://example.com/ns/ontology#property_2\""));
    assert!(out.contains("\"http://example.com/ns/ontology#property-3\""));
}

#[test]
fn rust_unit_without_case_keeps_keys() {
    let out = render_rust(&test_graph(), options("Test"));
    assert!(out.contains("pub static propertyLocalised4: LazyLock<Term> ="));
    assert!(out.contains("pub static property_3: LazyLock<Term> ="));
}

// ---------------------------------------------------------------------------
// Java rendering
// ---------------------------------------------------------------------------

#[test]
fn java_unit_has_class_scaffolding() {
    let mut opts = options("Test");
    opts.package_name = Some("com.example.vocab".to_string());
    let out = render_java(&test_graph(), opts);
    assert!(out.contains("package com.example.vocab;"));
    assert!(out.contains("public class Test {"));
    assert!(out.contains("public static final String NAMESPACE = \"http://example.com/ns/ontology#\";"));
    assert!(out.contains("public static final String PREFIX = \"test\";"));
    assert!(out.contains("private Test() {"));
}

#[test]
fn java_unit_static_initializer_reconstructs_terms() {
    let mut opts = options("Test");
    opts.constant_case = Some(CaseFormat::UpperSnake);
    let out = render_java(&test_graph(), opts);
    assert!(out.contains("static {"));
    assert!(out.contains("ValueFactory factory = SimpleValueFactory.getInstance();"));
    assert!(out.contains("PROPERTY_LOCALISED4 = factory.createIRI(Test.NAMESPACE, \"propertyLocalised4\");"));
    // The verbatim identifier also appears in the constant's javadoc.
    assert!(out.contains("{@code http://example.com/ns/ontology#propertyLocalised4}"));
}

#[test]
fn java_string_constants_append_raw_keys_to_namespace() {
    let mut opts = options("Test");
    opts.string_constant_suffix = Some("_STRING".to_string());
    let out = render_java(&test_graph(), opts);
    assert!(out.contains("public static final String property_3_STRING = Test.NAMESPACE + \"property-3\";"));
}
