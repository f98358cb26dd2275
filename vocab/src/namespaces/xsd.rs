//! `xsd:` — XML Schema datatypes.

use crate::model::Namespace;

/// The `xsd:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "xsd",
    iri: "http://www.w3.org/2001/XMLSchema#",
    label: "XML Schema Datatypes",
};

/// `xsd:string`.
pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:decimal`.
pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:dateTime`.
pub const DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
