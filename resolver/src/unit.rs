//! Units of measure and the unit resolver.
//!
//! A [`Property`](crate::record::Property) record carries a [`Unit`] rather
//! than the raw unit IRI found in its repository. Turning the IRI into a
//! `Unit` is delegated to a [`UnitResolver`]; the default resolver is a
//! [`UnitCatalog`] seeded with common QUDT units and optionally extended from
//! QUDT unit files.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;
use sosa_vocab::namespaces::{qudt, rdf, rdfs, unit};

use crate::error::Result;
use crate::loader::{load_repository, Decoder};
use crate::statement::Statement;

/// A unit of measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// IRI of the unit (e.g., `http://qudt.org/vocab/unit/PPM`).
    pub resource_iri: String,
    /// Human-readable name.
    pub label: String,
    /// Short textual abbreviation (e.g., `ppm`).
    pub abbreviation: String,
    /// Typographic symbol (e.g., `°C`).
    pub symbol: String,
}

impl Unit {
    /// Creates a unit with no symbol.
    pub fn new(
        resource_iri: impl Into<String>,
        label: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            resource_iri: resource_iri.into(),
            label: label.into(),
            abbreviation: abbreviation.into(),
            symbol: String::new(),
        }
    }

    /// Sets the symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// The dimensionless unit, used when a property declares no unit.
    #[must_use]
    pub fn unitless() -> Self {
        Unit::new(unit::UNITLESS, "Unitless", "")
    }

    /// Returns `true` for the dimensionless unit.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.resource_iri == unit::UNITLESS
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::unitless()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.symbol.is_empty() {
            f.write_str(&self.symbol)
        } else if !self.abbreviation.is_empty() {
            f.write_str(&self.abbreviation)
        } else {
            f.write_str(&self.label)
        }
    }
}

/// Failure to resolve a unit identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    /// No unit is known under this IRI.
    #[error("unknown unit <{iri}>")]
    Unknown {
        /// The unresolvable unit IRI.
        iri: String,
    },
}

/// Maps unit identifiers to [`Unit`] values.
pub trait UnitResolver: Send + Sync {
    /// Resolves `iri` to a unit.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::Unknown`] if the identifier is not recognised.
    fn resolve_unit(&self, iri: &str) -> std::result::Result<Unit, UnitError>;
}

/// An in-memory table of known units.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    units: HashMap<String, Unit>,
}

impl UnitCatalog {
    /// Creates a catalog with no units.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a catalog holding the built-in QUDT units.
    #[must_use]
    pub fn builtin() -> Self {
        static BUILTIN: OnceLock<UnitCatalog> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let mut catalog = UnitCatalog::empty();
                for u in builtin_units() {
                    catalog.insert(u);
                }
                catalog
            })
            .clone()
    }

    /// Adds or replaces a unit.
    pub fn insert(&mut self, unit: Unit) {
        self.units.insert(unit.resource_iri.clone(), unit);
    }

    /// Looks up a unit by IRI.
    #[must_use]
    pub fn get(&self, iri: &str) -> Option<&Unit> {
        self.units.get(iri)
    }

    /// Returns the number of known units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns `true` if the catalog knows no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Loads unit definitions from a QUDT unit file.
    ///
    /// Every subject typed `qudt:Unit`, or whose IRI lies in the QUDT unit
    /// namespace, becomes a unit built from its `rdfs:label`,
    /// `qudt:abbreviation`, and `qudt:symbol`; later statements win. Units
    /// already in the catalog are replaced. An absent file adds nothing.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error if the file exists but cannot be read or
    /// parsed.
    pub fn load_qudt(&mut self, decoder: &dyn Decoder, path: &Path) -> Result<usize> {
        let Some(repo) = load_repository(decoder, path)? else {
            return Ok(0);
        };

        let mut found: Vec<Unit> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut typed: Vec<bool> = Vec::new();
        for statement in &repo {
            let slot = *positions.entry(statement.subject.as_str()).or_insert_with(|| {
                found.push(Unit::new(statement.subject.as_str(), "", ""));
                typed.push(unit::NAMESPACE.contains(&statement.subject));
                found.len() - 1
            });
            apply_unit_statement(&mut found[slot], &mut typed[slot], statement);
        }

        let mut added = 0;
        for (u, is_unit) in found.into_iter().zip(typed) {
            if is_unit {
                self.insert(u);
                added += 1;
            }
        }
        tracing::info!("Loaded {} units from {}", added, path.display());
        Ok(added)
    }
}

fn apply_unit_statement(u: &mut Unit, is_unit: &mut bool, statement: &Statement) {
    let value = statement.object.as_str();
    match statement.predicate.as_str() {
        rdf::TYPE if value == qudt::UNIT_CLASS => *is_unit = true,
        rdfs::LABEL => u.label = value.to_string(),
        qudt::ABBREVIATION => u.abbreviation = value.to_string(),
        qudt::SYMBOL => u.symbol = value.to_string(),
        _ => {}
    }
}

impl UnitResolver for UnitCatalog {
    fn resolve_unit(&self, iri: &str) -> std::result::Result<Unit, UnitError> {
        self.get(iri).cloned().ok_or_else(|| UnitError::Unknown {
            iri: iri.to_string(),
        })
    }
}

fn builtin_units() -> Vec<Unit> {
    vec![
        Unit::unitless(),
        Unit::new(unit::PERCENT, "Percent", "%").with_symbol("%"),
        Unit::new(unit::PPM, "Parts per million", "ppm").with_symbol("ppm"),
        Unit::new(unit::PPB, "Parts per billion", "ppb").with_symbol("ppb"),
        Unit::new(unit::DEG_C, "Degree Celsius", "degC").with_symbol("°C"),
        Unit::new(unit::K, "Kelvin", "K").with_symbol("K"),
        Unit::new(unit::PA, "Pascal", "Pa").with_symbol("Pa"),
        Unit::new(unit::HECTO_PA, "Hectopascal", "hPa").with_symbol("hPa"),
        Unit::new(unit::MICRO_GM_PER_M3, "Microgram per Cubic Metre", "ug/m^3").with_symbol("μg/m³"),
        Unit::new(unit::MILLI_GM_PER_M3, "Milligram per Cubic Metre", "mg/m^3").with_symbol("mg/m³"),
        Unit::new(unit::M_PER_SEC, "Metre per Second", "m/s").with_symbol("m/s"),
        Unit::new(unit::DEG, "Degree", "deg").with_symbol("°"),
        Unit::new(unit::M, "Metre", "m").with_symbol("m"),
        Unit::new(unit::LUX, "Lux", "lx").with_symbol("lx"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_unitless() {
        let catalog = UnitCatalog::builtin();
        assert_eq!(catalog.len(), 14);
        let u = catalog.resolve_unit(unit::UNITLESS);
        assert_eq!(u, Ok(Unit::unitless()));
    }

    #[test]
    fn unknown_unit_is_an_error() {
        let err = UnitCatalog::builtin()
            .resolve_unit("http://qudt.org/vocab/unit/FURLONG")
            .unwrap_err();
        assert_eq!(
            err,
            UnitError::Unknown {
                iri: "http://qudt.org/vocab/unit/FURLONG".into()
            }
        );
    }

    #[test]
    fn display_prefers_symbol() {
        let ppm = UnitCatalog::builtin().resolve_unit(unit::PPM).unwrap();
        assert_eq!(ppm.to_string(), "ppm");
        assert_eq!(Unit::new("x", "Thing", "th").to_string(), "th");
        assert_eq!(Unit::unitless().to_string(), "Unitless");
    }

    #[test]
    fn default_is_unitless() {
        assert!(Unit::default().is_unitless());
    }
}
