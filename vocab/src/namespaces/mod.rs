//! Vocabulary namespace modules.
//!
//! Each sub-module holds the full IRIs of one namespace as `&str` constants
//! together with its [`Namespace`](crate::Namespace) descriptor.

pub mod obo;
pub mod qudt;
pub mod rdf;
pub mod rdfs;
pub mod schema;
pub mod sosa;
pub mod ssn;
pub mod ssn_system;
pub mod unit;
pub mod xsd;
