//! Resolution of SOSA resource IRIs into typed records.
//!
//! The `sosa-resolver` crate loads RDF triple repositories (Turtle or
//! N-Triples) into per-kind repository groups and answers "what do we know
//! about this IRI?" with a typed record: a [`FeatureOfInterest`], a
//! [`Property`] with its resolved [`Unit`], a [`System`], or a [`Procedure`].
//!
//! # Entry Point
//!
//! ```no_run
//! use sosa_resolver::{EntityKind, ResolutionService};
//!
//! let service = ResolutionService::new();
//! service.load(EntityKind::FeatureOfInterest, "features.ttl")?;
//!
//! let feature = service.feature_of_interest("http://aclima.io/schema/1.0/NitricOxide")?;
//! println!("{feature}: {}", feature.description);
//! # Ok::<(), sosa_resolver::Error>(())
//! ```
//!
//! # Resolution Rules
//!
//! - Loading an absent source contributes zero statements; it is not an error.
//! - Resolving an unknown IRI yields a record with only `resource_iri` set.
//! - Statements are applied in load order, so a later repository overrides an
//!   earlier one field by field.
//! - Predicates without a field rule are ignored.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod mapping;
pub mod record;
pub mod repository;
pub mod service;
pub mod statement;
pub mod unit;

pub use config::{Config, SourceConfig, UnitsConfig};
pub use error::{Error, Result};
pub use loader::{Decoder, RdfDecoder, RdfFormat};
pub use record::{EntityKind, FeatureOfInterest, Procedure, Property, Record, Resource, System};
pub use repository::{Repository, RepositoryGroup};
pub use service::{ResolutionService, ResolutionServiceBuilder};
pub use statement::{Statement, Term};
pub use unit::{Unit, UnitCatalog, UnitError, UnitResolver};
