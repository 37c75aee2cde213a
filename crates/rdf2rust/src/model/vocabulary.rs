//! Well-known RDF vocabulary IRIs used to locate labels and descriptions.
//!
//! - `rdf:` / `rdfs:` / `owl:` -- core W3C vocabularies
//! - `dc:` / `dcterms:` -- Dublin Core (elements and terms)
//! - `skos:` -- SKOS labelling vocabulary

/// RDF core vocabulary
pub mod rdf {
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDF Schema vocabulary
pub mod rdfs {
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    pub const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
}

/// OWL vocabulary
pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
}

/// Dublin Core elements (legacy namespace)
pub mod dc {
    pub const NS: &str = "http://purl.org/dc/elements/1.1/";
    pub const TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
}

/// Dublin Core terms
pub mod dcterms {
    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const TITLE: &str = "http://purl.org/dc/terms/title";
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}

/// SKOS labelling vocabulary
pub mod skos {
    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
    pub const ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
    pub const DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
}

/// Label predicates, in resolution priority order.
pub const LABEL_PROPERTIES: &[&str] = &[
    rdfs::LABEL,
    dcterms::TITLE,
    dc::TITLE,
    skos::PREF_LABEL,
    skos::ALT_LABEL,
];

/// Comment/description predicates, in resolution priority order.
pub const COMMENT_PROPERTIES: &[&str] = &[
    rdfs::COMMENT,
    dcterms::DESCRIPTION,
    skos::DEFINITION,
    dc::DESCRIPTION,
];
