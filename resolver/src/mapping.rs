//! Field-mapping tables: which predicate fills which record field.
//!
//! Each entity kind has one static, ordered table of [`FieldRule`]s. Adding a
//! predicate or a kind is an edit to these tables, not to the builder.
//! Predicates are unique within a table.

use sosa_vocab::namespaces::{obo, qudt, rdf, rdfs, schema};

use crate::record::{FeatureOfInterest, Procedure, Property, System};
use crate::unit::Unit;

/// How a statement's object reaches its field.
pub enum Assign<R> {
    /// Identity transform: the object's plain string is stored as-is.
    Text(fn(&mut R, String)),
    /// Unit transform: the object is resolved through the unit resolver.
    Unit(fn(&mut R, Unit)),
}

/// Maps one predicate to one record field.
pub struct FieldRule<R> {
    /// Predicate IRI that triggers the rule.
    pub predicate: &'static str,
    /// Name of the populated field, for diagnostics and inspection.
    pub field: &'static str,
    /// Transform and setter.
    pub assign: Assign<R>,
}

impl<R> FieldRule<R> {
    /// Returns `true` if the rule goes through the unit resolver.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        matches!(self.assign, Assign::Unit(_))
    }
}

impl<R> std::fmt::Debug for FieldRule<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("predicate", &self.predicate)
            .field("field", &self.field)
            .field("transform", &if self.is_unit() { "unit" } else { "identity" })
            .finish()
    }
}

/// Rules for [`FeatureOfInterest`].
pub static FEATURE_OF_INTEREST: &[FieldRule<FeatureOfInterest>] = &[
    FieldRule {
        predicate: rdf::TYPE,
        field: "type_iri",
        assign: Assign::Text(|r, v| r.type_iri = v),
    },
    FieldRule {
        predicate: rdfs::LABEL,
        field: "label",
        assign: Assign::Text(|r, v| r.label = v),
    },
    FieldRule {
        predicate: schema::DESCRIPTION,
        field: "description",
        assign: Assign::Text(|r, v| r.description = v),
    },
    FieldRule {
        predicate: qudt::ABBREVIATION,
        field: "abbreviation",
        assign: Assign::Text(|r, v| r.abbreviation = v),
    },
];

/// Rules for [`Property`].
pub static PROPERTY: &[FieldRule<Property>] = &[
    FieldRule {
        predicate: rdf::TYPE,
        field: "type_iri",
        assign: Assign::Text(|r, v| r.type_iri = v),
    },
    FieldRule {
        predicate: rdfs::LABEL,
        field: "label",
        assign: Assign::Text(|r, v| r.label = v),
    },
    FieldRule {
        predicate: schema::DESCRIPTION,
        field: "description",
        assign: Assign::Text(|r, v| r.description = v),
    },
    FieldRule {
        predicate: qudt::UNIT,
        field: "unit",
        assign: Assign::Unit(|r, u| r.unit = u),
    },
];

/// Rules for [`System`].
pub static SYSTEM: &[FieldRule<System>] = &[
    FieldRule {
        predicate: rdf::TYPE,
        field: "type_iri",
        assign: Assign::Text(|r, v| r.type_iri = v),
    },
    FieldRule {
        predicate: rdfs::LABEL,
        field: "label",
        assign: Assign::Text(|r, v| r.label = v),
    },
    FieldRule {
        predicate: schema::DESCRIPTION,
        field: "description",
        assign: Assign::Text(|r, v| r.description = v),
    },
    FieldRule {
        predicate: schema::MANUFACTURER,
        field: "manufacturer",
        assign: Assign::Text(|r, v| r.manufacturer = v),
    },
    FieldRule {
        predicate: schema::MODEL,
        field: "model",
        assign: Assign::Text(|r, v| r.model = v),
    },
    FieldRule {
        predicate: schema::SERIAL_NUMBER,
        field: "serial_number",
        assign: Assign::Text(|r, v| r.serial_number = v),
    },
    FieldRule {
        predicate: obo::VERSION_NUMBER,
        field: "version",
        assign: Assign::Text(|r, v| r.version = v),
    },
];

/// Rules for [`Procedure`].
pub static PROCEDURE: &[FieldRule<Procedure>] = &[
    FieldRule {
        predicate: rdf::TYPE,
        field: "type_iri",
        assign: Assign::Text(|r, v| r.type_iri = v),
    },
    FieldRule {
        predicate: rdfs::LABEL,
        field: "label",
        assign: Assign::Text(|r, v| r.label = v),
    },
    FieldRule {
        predicate: schema::DESCRIPTION,
        field: "description",
        assign: Assign::Text(|r, v| r.description = v),
    },
];

/// Finds the rule for `predicate` in `rules`.
#[must_use]
pub fn rule_for<'a, R>(rules: &'a [FieldRule<R>], predicate: &str) -> Option<&'a FieldRule<R>> {
    rules.iter().find(|rule| rule.predicate == predicate)
}
