//! SOSA and companion vocabularies encoded as static IRI constants.
//!
//! The `sosa-vocab` crate carries the well-known terms that the resolver and
//! its callers exchange as opaque identifiers: the W3C SOSA and SSN
//! vocabularies, the QUDT unit schema, the schema.org properties used to
//! describe devices, and the handful of RDF/RDFS/XSD terms every graph uses.
//!
//! # Entry Point
//!
//! ```
//! use sosa_vocab::namespaces::{rdfs, sosa};
//!
//! assert_eq!(sosa::SENSOR, "http://www.w3.org/ns/sosa/Sensor");
//! assert_eq!(rdfs::LABEL, "http://www.w3.org/2000/01/rdf-schema#label");
//! ```
//!
//! # Compact IRIs
//!
//! ```
//! let iri = sosa_vocab::expand("sosa:FeatureOfInterest");
//! assert_eq!(iri.as_deref(), Some("http://www.w3.org/ns/sosa/FeatureOfInterest"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;

pub use model::{compact, expand, Namespace, ALL};
