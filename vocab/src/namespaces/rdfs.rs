//! `rdfs:` — the RDF Schema vocabulary.

use crate::model::Namespace;

/// The `rdfs:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "rdfs",
    iri: "http://www.w3.org/2000/01/rdf-schema#",
    label: "RDF Schema",
};

/// `rdfs:label`: a human-readable name for the subject.
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `rdfs:comment`: a human-readable description of the subject.
pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

/// `rdfs:subClassOf`.
pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
