//! `obo:` — OBO Foundry terms, as used by the Software Ontology (SWO).
//!
//! Reference: <http://www.ontobee.org/ontology/SWO>

use crate::model::Namespace;

/// The `obo:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "obo",
    iri: "http://purl.obolibrary.org/obo/",
    label: "OBO Foundry",
};

/// `obo:IAO_0000129` (version number): a sequence of characters borne by a
/// manufactured product that indicates its order within a set of products
/// having the same name.
pub const VERSION_NUMBER: &str = "http://purl.obolibrary.org/obo/IAO_0000129";
