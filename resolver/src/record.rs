//! Typed records produced by resolution.
//!
//! Every record shares the base shape `resource_iri`, `type_iri`, `label`,
//! `description`; kinds add their own extra fields. Records are plain values:
//! a fresh one is built on every lookup and never mutated afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::mapping::{self, FieldRule};
use crate::unit::Unit;

/// The closed set of entity kinds, one repository group each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    /// `sosa:FeatureOfInterest`.
    FeatureOfInterest,
    /// `ssn:Property` and its observable / actuatable subclasses.
    Property,
    /// `ssn:System`: sensors, actuators, samplers, and platforms.
    System,
    /// `sosa:Procedure`.
    Procedure,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::FeatureOfInterest,
        EntityKind::Property,
        EntityKind::System,
        EntityKind::Procedure,
    ];

    /// Returns the kebab-case name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::FeatureOfInterest => "feature-of-interest",
            EntityKind::Property => "property",
            EntityKind::System => "system",
            EntityKind::Procedure => "procedure",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// A record type that can be built from statements.
pub trait Record: Sized + 'static {
    /// The entity kind whose repository group backs this record.
    const KIND: EntityKind;

    /// Creates a record with only `resource_iri` set.
    fn new(resource_iri: &str) -> Self;

    /// The predicate-to-field rules for this kind, in table order.
    fn field_rules() -> &'static [FieldRule<Self>];
}

/// A Feature of Interest being observed or actuated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureOfInterest {
    /// IRI of the resource.
    pub resource_iri: String,
    /// IRI of the resource's RDF type.
    pub type_iri: String,
    /// Human-readable name.
    pub label: String,
    /// Additional information describing the resource.
    pub description: String,
    /// Short abbreviation used to shorten the display form.
    pub abbreviation: String,
}

impl Record for FeatureOfInterest {
    const KIND: EntityKind = EntityKind::FeatureOfInterest;

    fn new(resource_iri: &str) -> Self {
        Self {
            resource_iri: resource_iri.to_string(),
            type_iri: String::new(),
            label: String::new(),
            description: String::new(),
            abbreviation: String::new(),
        }
    }

    fn field_rules() -> &'static [FieldRule<Self>] {
        mapping::FEATURE_OF_INTEREST
    }
}

impl fmt::Display for FeatureOfInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.abbreviation.is_empty() {
            f.write_str(&self.label)
        } else {
            f.write_str(&self.abbreviation)
        }
    }
}

/// A Property belonging to a Feature of Interest.
///
/// `type_iri` tells whether this is an observable property, an actuatable
/// property, or their common superclass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// IRI of the resource.
    pub resource_iri: String,
    /// IRI of the resource's RDF type.
    pub type_iri: String,
    /// Human-readable name.
    pub label: String,
    /// Additional information describing the resource.
    pub description: String,
    /// Unit used to express an observation or actuation of the property.
    pub unit: Unit,
}

impl Record for Property {
    const KIND: EntityKind = EntityKind::Property;

    fn new(resource_iri: &str) -> Self {
        Self {
            resource_iri: resource_iri.to_string(),
            type_iri: String::new(),
            label: String::new(),
            description: String::new(),
            unit: Unit::unitless(),
        }
    }

    fn field_rules() -> &'static [FieldRule<Self>] {
        mapping::PROPERTY
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A piece of infrastructure implementing procedures: a sensor, actuator,
/// sampler, or platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct System {
    /// IRI of the resource.
    pub resource_iri: String,
    /// IRI of the resource's RDF type.
    pub type_iri: String,
    /// Human-readable name.
    pub label: String,
    /// Additional information describing the resource.
    pub description: String,
    /// Manufacturer of the device.
    pub manufacturer: String,
    /// Model of the device.
    pub model: String,
    /// Serial number of the device.
    pub serial_number: String,
    /// Hardware or firmware version.
    pub version: String,
}

impl Record for System {
    const KIND: EntityKind = EntityKind::System;

    fn new(resource_iri: &str) -> Self {
        Self {
            resource_iri: resource_iri.to_string(),
            type_iri: String::new(),
            label: String::new(),
            description: String::new(),
            manufacturer: String::new(),
            model: String::new(),
            serial_number: String::new(),
            version: String::new(),
        }
    }

    fn field_rules() -> &'static [FieldRule<Self>] {
        mapping::SYSTEM
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        if !self.model.is_empty() {
            write!(f, " ({})", self.model)?;
        }
        Ok(())
    }
}

/// A workflow, protocol, plan, or algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Procedure {
    /// IRI of the resource.
    pub resource_iri: String,
    /// IRI of the resource's RDF type.
    pub type_iri: String,
    /// Human-readable name.
    pub label: String,
    /// Additional information describing the resource.
    pub description: String,
}

impl Record for Procedure {
    const KIND: EntityKind = EntityKind::Procedure;

    fn new(resource_iri: &str) -> Self {
        Self {
            resource_iri: resource_iri.to_string(),
            type_iri: String::new(),
            label: String::new(),
            description: String::new(),
        }
    }

    fn field_rules() -> &'static [FieldRule<Self>] {
        mapping::PROCEDURE
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A record of any kind, for callers that pick the kind at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Resource {
    /// A feature of interest.
    FeatureOfInterest(FeatureOfInterest),
    /// A property.
    Property(Property),
    /// A system.
    System(System),
    /// A procedure.
    Procedure(Procedure),
}

impl Resource {
    /// Returns the kind of the wrapped record.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Resource::FeatureOfInterest(_) => EntityKind::FeatureOfInterest,
            Resource::Property(_) => EntityKind::Property,
            Resource::System(_) => EntityKind::System,
            Resource::Procedure(_) => EntityKind::Procedure,
        }
    }

    /// Returns the resource IRI.
    #[must_use]
    pub fn resource_iri(&self) -> &str {
        match self {
            Resource::FeatureOfInterest(r) => &r.resource_iri,
            Resource::Property(r) => &r.resource_iri,
            Resource::System(r) => &r.resource_iri,
            Resource::Procedure(r) => &r.resource_iri,
        }
    }

    /// Returns the RDF type IRI, or an empty string.
    #[must_use]
    pub fn type_iri(&self) -> &str {
        match self {
            Resource::FeatureOfInterest(r) => &r.type_iri,
            Resource::Property(r) => &r.type_iri,
            Resource::System(r) => &r.type_iri,
            Resource::Procedure(r) => &r.type_iri,
        }
    }

    /// Returns the label, or an empty string.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Resource::FeatureOfInterest(r) => &r.label,
            Resource::Property(r) => &r.label,
            Resource::System(r) => &r.label,
            Resource::Procedure(r) => &r.label,
        }
    }

    /// Returns the description, or an empty string.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Resource::FeatureOfInterest(r) => &r.description,
            Resource::Property(r) => &r.description,
            Resource::System(r) => &r.description,
            Resource::Procedure(r) => &r.description,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::FeatureOfInterest(r) => r.fmt(f),
            Resource::Property(r) => r.fmt(f),
            Resource::System(r) => r.fmt(f),
            Resource::Procedure(r) => r.fmt(f),
        }
    }
}
