//! Namespace model and compact-IRI helpers.
//!
//! Every module under [`crate::namespaces`] exposes a `NAMESPACE` constant of
//! type [`Namespace`]. [`ALL`] lists them in the order used for prefix
//! lookups.

use crate::namespaces::{obo, qudt, rdf, rdfs, schema, sosa, ssn, ssn_system, unit, xsd};

/// A vocabulary namespace (e.g., `sosa:` or `qudt:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    /// The conventional prefix (e.g., `"sosa"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace (e.g., `"http://www.w3.org/ns/sosa/"`).
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

impl Namespace {
    /// Returns the full IRI of `local` within this namespace.
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.iri, local)
    }

    /// Returns `true` if `iri` lies inside this namespace.
    #[must_use]
    pub fn contains(&self, iri: &str) -> bool {
        iri.len() > self.iri.len() && iri.starts_with(self.iri)
    }
}

/// All known namespaces.
pub const ALL: &[Namespace] = &[
    rdf::NAMESPACE,
    rdfs::NAMESPACE,
    xsd::NAMESPACE,
    schema::NAMESPACE,
    qudt::NAMESPACE,
    unit::NAMESPACE,
    sosa::NAMESPACE,
    ssn::NAMESPACE,
    ssn_system::NAMESPACE,
    obo::NAMESPACE,
    Namespace {
        prefix: "owl",
        iri: "http://www.w3.org/2002/07/owl#",
        label: "OWL",
    },
];

/// Expands a compact IRI such as `"sosa:Sensor"` to its full form.
///
/// Returns `None` for absolute IRIs (anything containing `://`), strings
/// without a prefix separator, and unknown prefixes.
#[must_use]
pub fn expand(curie: &str) -> Option<String> {
    if curie.contains("://") {
        return None;
    }
    let (prefix, local) = curie.split_once(':')?;
    ALL.iter()
        .find(|ns| ns.prefix == prefix)
        .map(|ns| ns.term(local))
}

/// Compacts a full IRI into `prefix:local` form.
///
/// The longest matching namespace wins, so `ssn-system:` terms are not
/// reported under `ssn:`. Returns `None` if no namespace matches.
#[must_use]
pub fn compact(iri: &str) -> Option<String> {
    ALL.iter()
        .filter(|ns| ns.contains(iri))
        .max_by_key(|ns| ns.iri.len())
        .map(|ns| format!("{}:{}", ns.prefix, &iri[ns.iri.len()..]))
}
