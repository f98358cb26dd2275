//! `unit:` — QUDT unit individuals.
//!
//! Only the units the resolver ships with are listed here; anything else is
//! reachable through [`NAMESPACE`](self::NAMESPACE).

use crate::model::Namespace;

/// The `unit:` namespace.
pub const NAMESPACE: Namespace = Namespace {
    prefix: "unit",
    iri: "http://qudt.org/vocab/unit/",
    label: "QUDT Units",
};

/// `unit:UNITLESS`: the dimensionless unit.
pub const UNITLESS: &str = "http://qudt.org/vocab/unit/UNITLESS";
/// `unit:PERCENT`.
pub const PERCENT: &str = "http://qudt.org/vocab/unit/PERCENT";
/// `unit:PPM`: parts per million.
pub const PPM: &str = "http://qudt.org/vocab/unit/PPM";
/// `unit:PPB`: parts per billion.
pub const PPB: &str = "http://qudt.org/vocab/unit/PPB";
/// `unit:DEG_C`: degree Celsius.
pub const DEG_C: &str = "http://qudt.org/vocab/unit/DEG_C";
/// `unit:K`: kelvin.
pub const K: &str = "http://qudt.org/vocab/unit/K";
/// `unit:PA`: pascal.
pub const PA: &str = "http://qudt.org/vocab/unit/PA";
/// `unit:HectoPA`: hectopascal.
pub const HECTO_PA: &str = "http://qudt.org/vocab/unit/HectoPA";
/// `unit:MicroGM-PER-M3`: microgram per cubic metre.
pub const MICRO_GM_PER_M3: &str = "http://qudt.org/vocab/unit/MicroGM-PER-M3";
/// `unit:MilliGM-PER-M3`: milligram per cubic metre.
pub const MILLI_GM_PER_M3: &str = "http://qudt.org/vocab/unit/MilliGM-PER-M3";
/// `unit:M-PER-SEC`: metre per second.
pub const M_PER_SEC: &str = "http://qudt.org/vocab/unit/M-PER-SEC";
/// `unit:DEG`: degree (plane angle).
pub const DEG: &str = "http://qudt.org/vocab/unit/DEG";
/// `unit:M`: metre.
pub const M: &str = "http://qudt.org/vocab/unit/M";
/// `unit:LUX`.
pub const LUX: &str = "http://qudt.org/vocab/unit/LUX";
