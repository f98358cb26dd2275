//! `rdf:` — the RDF concepts vocabulary.

use crate::model::Namespace;

/// The `rdf:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "rdf",
    iri: "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    label: "RDF",
};

/// `rdf:type`: the subject is an instance of a class.
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdf:langString`: datatype of language-tagged literals.
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
