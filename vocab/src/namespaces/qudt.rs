//! `qudt:` — the QUDT schema (Quantities, Units, Dimensions and Types).
//!
//! Reference: <http://qudt.org/schema/qudt/>

use crate::model::Namespace;

/// The `qudt:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "qudt",
    iri: "http://qudt.org/schema/qudt/",
    label: "QUDT Schema",
};

/// `qudt:Unit`: the class of units of measure.
pub const UNIT_CLASS: &str = "http://qudt.org/schema/qudt/Unit";

/// `qudt:abbreviation`: a short form of the resource's name.
pub const ABBREVIATION: &str = "http://qudt.org/schema/qudt/abbreviation";

/// `qudt:symbol`: the typographic symbol of a unit.
pub const SYMBOL: &str = "http://qudt.org/schema/qudt/symbol";

/// `qudt:unit`: the unit in which a quantity is expressed.
pub const UNIT: &str = "http://qudt.org/schema/qudt/unit";

/// `qudt:hasQuantityKind`.
pub const HAS_QUANTITY_KIND: &str = "http://qudt.org/schema/qudt/hasQuantityKind";
